//! Basic usage of the `fixed_list` crate:
//!
//! * Creating a list.
//! * Adding items at either end.
//! * Taking items from either end.
//! * Removing a specific item.

use fixed_list::FixedList;

fn main() {
    let alice = "Alice".to_string();
    let bob = "Bob".to_string();
    let charlie = "Charlie".to_string();
    let dave = "Dave".to_string();

    // All 3 nodes are created right here, inside the list value. Nothing is allocated later.
    let mut list = FixedList::<String, 3>::new();

    list.append(&bob).unwrap();
    list.append(&charlie).unwrap();
    list.push(&alice).unwrap();

    println!(
        "List contains {} items out of a fixed capacity of {}",
        list.len(),
        list.capacity()
    );

    // The list is full, so this fails and leaves the list as it was.
    if let Err(error) = list.append(&dave) {
        println!("Could not add {dave}: {error}");
    }

    // Items are matched by identity, so we pass the same reference that we inserted.
    let removed = list.remove(&bob);
    println!("Removed: {removed:?}");

    // Removal made room for another item.
    list.append(&dave).unwrap();

    for name in &list {
        println!("In list: {name}");
    }

    println!("Front: {:?}, back: {:?}", list.pop(), list.pop_tail());
}
