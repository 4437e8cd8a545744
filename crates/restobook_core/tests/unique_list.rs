use restobook_core::{
    Email, EntityKind, Ingredient, ListError, LoyaltyPoints, Member, Name, Phone, Quantity,
    UniqueEntityList, Unit,
};

fn member(name: &str, phone: &str) -> Member {
    Member::new(
        Name::parse(name).unwrap(),
        Phone::parse(phone).unwrap(),
        Email::parse("member@example.com").unwrap(),
    )
}

fn ingredient(name: &str, quantity: u32) -> Ingredient {
    Ingredient::new(
        Name::parse(name).unwrap(),
        Quantity::new(quantity).unwrap(),
        Unit::parse("kg").unwrap(),
    )
}

fn no_identity_duplicates(list: &UniqueEntityList<Member>) -> bool {
    use restobook_core::Entity;
    let items = list.as_slice();
    items.iter().enumerate().all(|(i, a)| {
        items
            .iter()
            .enumerate()
            .all(|(j, b)| i == j || !a.is_same_identity(b))
    })
}

#[test]
fn add_preserves_insertion_order() {
    let mut list = UniqueEntityList::new();
    list.add(member("Alice", "111")).unwrap();
    list.add(member("Bob", "222")).unwrap();
    list.add(member("Carl", "333")).unwrap();

    let names: Vec<&str> = list.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carl"]);
}

#[test]
fn add_rejects_same_identity_even_with_other_fields_changed() {
    let mut list = UniqueEntityList::new();
    let alice = member("Alice", "111");
    list.add(alice.clone()).unwrap();

    let richer_alice = alice.with_points(LoyaltyPoints::new(500).unwrap());
    let err = list.add(richer_alice).expect_err("same identity must be rejected");
    assert_eq!(err, ListError::DuplicateEntity(EntityKind::Member));
    assert_eq!(list.len(), 1);
}

#[test]
fn contains_uses_identity_not_full_equality() {
    let mut list = UniqueEntityList::new();
    list.add(ingredient("Flour", 3)).unwrap();

    assert!(list.contains(&ingredient("FLOUR", 99)));
    assert_eq!(list.position_of(&ingredient("FLOUR", 99)), None);
}

#[test]
fn set_item_replaces_in_place() {
    let mut list = UniqueEntityList::new();
    let alice = member("Alice", "111");
    let bob = member("Bob", "222");
    list.add(alice.clone()).unwrap();
    list.add(bob.clone()).unwrap();

    let renamed = member("Alicia", "111");
    list.set_item(&alice, renamed.clone()).unwrap();

    assert_eq!(list.as_slice(), &[renamed, bob]);
}

#[test]
fn set_item_allows_same_identity_edit() {
    let mut list = UniqueEntityList::new();
    let alice = member("Alice", "111");
    list.add(alice.clone()).unwrap();

    let edited = alice.clone().with_points(LoyaltyPoints::new(10).unwrap());
    list.set_item(&alice, edited.clone()).unwrap();
    assert_eq!(list.get(0), Some(&edited));
}

#[test]
fn set_item_rejects_clash_with_other_element() {
    let mut list = UniqueEntityList::new();
    let alice = member("Alice", "111");
    let bob = member("Bob", "222");
    list.add(alice.clone()).unwrap();
    list.add(bob.clone()).unwrap();

    let err = list
        .set_item(&alice, bob.clone())
        .expect_err("cannot become another member");
    assert_eq!(err, ListError::DuplicateEntity(EntityKind::Member));
    assert_eq!(list.as_slice(), &[alice, bob]);
}

#[test]
fn set_item_and_remove_locate_by_full_equality() {
    let mut list = UniqueEntityList::new();
    let alice = member("Alice", "111");
    list.add(alice.clone()).unwrap();

    let stale = alice.clone().with_points(LoyaltyPoints::new(7).unwrap());
    assert_eq!(
        list.set_item(&stale, member("Zed", "999")).unwrap_err(),
        ListError::EntityNotFound(EntityKind::Member)
    );
    assert_eq!(
        list.remove(&stale).unwrap_err(),
        ListError::EntityNotFound(EntityKind::Member)
    );

    assert_eq!(list.remove(&alice).unwrap(), alice);
    assert!(list.is_empty());
}

#[test]
fn replace_all_is_all_or_nothing() {
    let mut list = UniqueEntityList::new();
    list.add(member("Alice", "111")).unwrap();

    let err = list
        .replace_all(vec![member("Bob", "222"), member("Bob", "222")])
        .expect_err("duplicate input must be rejected");
    assert_eq!(err, ListError::DuplicateEntity(EntityKind::Member));
    assert_eq!(list.len(), 1);
    assert_eq!(list.get(0).unwrap().name.as_str(), "Alice");

    list.replace_all(vec![member("Carl", "333"), member("Bob", "222")])
        .unwrap();
    let names: Vec<&str> = list.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Carl", "Bob"]);
}

#[test]
fn mixed_successful_operations_never_leave_duplicates() {
    let mut list = UniqueEntityList::new();
    let phones = ["100", "200", "300", "100", "400", "200"];
    for (index, phone) in phones.iter().enumerate() {
        let _ = list.add(member(&format!("Guest {}", index % 3), phone));
    }
    let first = list.get(0).cloned().unwrap();
    let _ = list.set_item(&first, member("Guest 1", "200"));
    let _ = list.set_item(&first, member("Guest 9", "900"));
    let _ = list.replace_all(vec![member("A", "1"), member("A", "1")]);

    assert!(no_identity_duplicates(&list));
}
