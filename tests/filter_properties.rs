use folio::core::authors::{AuthorScreen, filter_authors};
use folio::core::form::TextEdit;
use folio::core::model::Author;
use proptest::prelude::*;

fn author_strategy() -> impl Strategy<Value = Author> {
    ("[a-z0-9-]{1,8}", "[A-Za-zÁÉÍÓÚáéíóúñ ]{0,16}").prop_map(|(id, name)| Author {
        id,
        name,
        nationality: "N".to_string(),
        genre: "G".to_string(),
    })
}

proptest! {
    #[test]
    fn filter_is_the_case_folded_substring_subsequence(
        authors in prop::collection::vec(author_strategy(), 0..12),
        search in "[A-Za-zÁáñ ]{0,4}",
    ) {
        let filtered = filter_authors(&authors, &search);
        let needle = search.to_lowercase();
        let expected: Vec<&Author> = authors
            .iter()
            .filter(|a| a.name.to_lowercase().contains(&needle))
            .collect();
        prop_assert_eq!(filtered, expected);
    }

    #[test]
    fn empty_search_yields_everything(
        authors in prop::collection::vec(author_strategy(), 0..12),
    ) {
        prop_assert_eq!(filter_authors(&authors, "").len(), authors.len());
    }

    #[test]
    fn filter_ignores_case_of_the_search(
        authors in prop::collection::vec(author_strategy(), 0..12),
        search in "[a-z]{0,3}",
    ) {
        prop_assert_eq!(
            filter_authors(&authors, &search),
            filter_authors(&authors, &search.to_uppercase())
        );
    }

    #[test]
    fn screen_selection_stays_inside_filtered_rows(
        authors in prop::collection::vec(author_strategy(), 0..12),
        search in "[a-z]{0,2}",
        selected in 0usize..20,
    ) {
        let mut screen = AuthorScreen::new();
        screen.receive(Ok(authors));
        screen.listing.selected = selected;
        screen.edit_search(&TextEdit::Paste(search));
        prop_assert!(screen.filtered.is_empty() || screen.listing.selected < screen.filtered.len());
        prop_assert_eq!(screen.selected_author().is_some(), !screen.filtered.is_empty());
    }
}
