use bookworm_core::recommend::CooccurrenceIndex;
use bookworm_core::shelf::Bookworm;
use bookworm_core::types::Book;

fn handmaids_tale() -> Book {
    Book::new("Margaret Atwood", "The Handmaid's Tale")
}

fn oryx_and_crake() -> Book {
    Book::new("Margaret Atwood", "Oryx and Crake")
}

fn the_bell_jar() -> Book {
    Book::new("Sylvia Plath", "The Bell Jar")
}

fn jane_eyre() -> Book {
    Book::new("Charlotte Brontë", "Jane Eyre")
}

#[test]
fn index_is_symmetric() {
    let bookworms = vec![
        Bookworm::new("Fadi", vec![handmaids_tale(), the_bell_jar()]),
        Bookworm::new("Peggy", vec![oryx_and_crake(), handmaids_tale(), jane_eyre()]),
    ];

    let index = CooccurrenceIndex::build(&bookworms);

    for (book, mates) in index.iter() {
        for mate in mates {
            let reverse = index
                .shelf_mates(mate)
                .unwrap_or_else(|| panic!("no entry for {mate:?}"));
            assert!(
                reverse.contains(book),
                "{book:?} lists {mate:?} but not the reverse"
            );
        }
    }
}

#[test]
fn entries_accumulate_across_bookworms() {
    let bookworms = vec![
        Bookworm::new("Fadi", vec![handmaids_tale(), the_bell_jar()]),
        Bookworm::new("Peggy", vec![oryx_and_crake(), handmaids_tale(), jane_eyre()]),
    ];

    let index = CooccurrenceIndex::build(&bookworms);

    let mates = index.shelf_mates(&handmaids_tale()).unwrap();
    let want = [jane_eyre(), oryx_and_crake(), the_bell_jar()];

    assert!(mates.iter().eq(want.iter()));
}

#[test]
fn lone_book_gets_no_entry() {
    let bookworms = vec![Bookworm::new("Solo", vec![handmaids_tale()])];

    let index = CooccurrenceIndex::build(&bookworms);

    assert!(index.shelf_mates(&handmaids_tale()).is_none());
    assert!(index.is_empty());
}

#[test]
fn duplicate_copies_pair_a_book_with_itself() {
    // Positional semantics: the second copy is "another book on the shelf"
    let bookworms = vec![Bookworm::new(
        "Collector",
        vec![the_bell_jar(), the_bell_jar()],
    )];

    let index = CooccurrenceIndex::build(&bookworms);

    let mates = index.shelf_mates(&the_bell_jar()).unwrap();
    assert!(mates.contains(&the_bell_jar()));
    assert_eq!(mates.len(), 1);
}

#[test]
fn no_bookworms_builds_an_empty_index() {
    let index = CooccurrenceIndex::build(&[]);

    assert!(index.is_empty());
    assert_eq!(index.len(), 0);
}

#[test]
fn mates_iterate_in_book_order() {
    let bookworms = vec![Bookworm::new(
        "Peggy",
        vec![the_bell_jar(), handmaids_tale(), jane_eyre(), oryx_and_crake()],
    )];

    let index = CooccurrenceIndex::build(&bookworms);

    let mates: Vec<&Book> = index.shelf_mates(&the_bell_jar()).unwrap().iter().collect();

    assert_eq!(
        mates,
        vec![&jane_eyre(), &oryx_and_crake(), &handmaids_tale()]
    );
}
