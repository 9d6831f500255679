use crate::static_list::{Item, StaticList};

#[test]
fn test_push_back_links_in_insertion_order() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);
    let mut third = Item::new(3);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut third) };

    assert_eq!(list.len(), 3);
    assert!(!list.is_empty());
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
}

#[test]
fn test_empty_list() {
    let list = StaticList::<i32>::new();

    assert_eq!(list.len(), 0);
    assert!(list.is_empty());
    assert_eq!(list.iter().next(), None);
    assert_eq!(list.front(), None);
    assert_eq!(list.back(), None);
}

#[test]
fn test_front_and_back() {
    let mut list = StaticList::new();
    let mut first = Item::new(10);
    let mut second = Item::new(20);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    assert_eq!(list.front(), Some(&10));
    assert_eq!(list.back(), Some(&20));
}

#[test]
fn test_dropping_item_removes_it() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    unsafe { list.push_back(&mut first) };
    let mut second = Item::new(2);
    unsafe { list.push_back(&mut second) };

    assert_eq!(list.len(), 2);

    drop(first);

    assert_eq!(list.len(), 1);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2]);
}

#[test]
fn test_dropping_middle_item_relinks_neighbors() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);
    let mut third = Item::new(3);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut third) };

    drop(second);

    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 1]);
}

#[test]
fn test_dropping_tail_updates_back() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    drop(second);

    assert_eq!(list.back(), Some(&1));
    assert_eq!(list.front(), Some(&1));
}

#[test]
fn test_item_drop_between_iterations_skips_removed_element() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);
    let mut third = Item::new(3);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut third) };

    // The list borrow must end before a linked item may be dropped
    let mut iter = list.iter();
    assert_eq!(iter.next(), Some(&1));
    drop(iter);

    drop(second);

    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_iterate_backwards() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);
    let mut third = Item::new(3);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut third) };

    assert_eq!(list.iter().rev().copied().collect::<Vec<_>>(), vec![3, 2, 1]);
}

#[test]
fn test_double_ended_iteration_meets_in_middle() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);
    let mut third = Item::new(3);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut third) };

    let mut iter = list.iter();
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.next(), Some(&1));
    assert_eq!(iter.next_back(), Some(&3));
    assert_eq!(iter.next(), Some(&2));
    assert_eq!(iter.next(), None);
    assert_eq!(iter.next_back(), None);
}

#[test]
fn test_iter_mut() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    for value in list.iter_mut() {
        *value *= 10;
    }

    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![10, 20]);
}

#[test]
fn test_item_value_access() {
    let mut list = StaticList::new();
    let mut item = Item::new(41);
    unsafe { list.push_back(&mut item) };

    *item.get_mut() += 1;

    assert_eq!(*item.get(), 42);
    assert_eq!(*item, 42);
    assert_eq!(list.front(), Some(&42));
}

#[test]
fn test_default_item() {
    let mut list = StaticList::new();
    let mut item: Item<u32> = Item::default();
    unsafe { list.push_back(&mut item) };

    assert_eq!(list.front(), Some(&0));
}

#[test]
fn test_detach_keeps_value() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    first.detach();

    assert!(!first.is_linked());
    assert_eq!(*first.get(), 1);
    assert_eq!(list.len(), 1);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2]);

    // A detached node can join again, now at the tail
    unsafe { list.push_back(&mut first) };
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn test_repushing_linked_item_moves_it_to_tail() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut first) };

    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![2, 1]);
}

#[test]
fn test_moving_item_preserves_position_after_relink() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);
    let mut third = Item::new(3);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };
    unsafe { list.push_back(&mut third) };

    // Relocate the middle node to fresh storage
    let mut relocated = second;
    unsafe { relocated.relink() };

    assert_eq!(list.len(), 3);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(*relocated, 2);

    drop(relocated);

    assert_eq!(list.len(), 2);
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 3]);
}

#[test]
fn test_moving_head_item_updates_list_head() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    let mut relocated = first;
    unsafe { relocated.relink() };

    assert_eq!(list.front(), Some(&1));
    assert_eq!(list.iter().copied().collect::<Vec<_>>(), vec![1, 2]);
}

#[test]
fn test_moving_detached_item_needs_no_relink() {
    let first = Item::new(5);
    let second = first;

    assert!(!second.is_linked());
    assert_eq!(*second, 5);
}

#[test]
fn test_moving_list_retargets_nodes() {
    let mut list = StaticList::new();
    let mut first = Item::new(10);
    let mut second = Item::new(20);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    let mut relocated = list;
    unsafe { relocated.relink() };

    assert_eq!(relocated.len(), 2);
    assert_eq!(relocated.iter().copied().collect::<Vec<_>>(), vec![10, 20]);

    // Node destruction must unlink from the list at its new address
    drop(first);

    assert_eq!(relocated.len(), 1);
    assert_eq!(relocated.iter().copied().collect::<Vec<_>>(), vec![20]);
}

#[test]
fn test_list_drop_orphans_items() {
    let mut item = Item::new(7);

    {
        let mut list = StaticList::new();
        unsafe { list.push_back(&mut item) };
        assert!(item.is_linked());
    }

    // The list is gone; the node's destructor must not touch it
    assert!(!item.is_linked());
    assert_eq!(*item.get(), 7);
}

#[test]
fn test_no_copy_of_values_on_link() {
    // Non-Clone payloads link fine; the list never copies elements
    struct Payload(#[allow(dead_code)] [u8; 16]);

    let mut list = StaticList::new();
    let mut item = Item::new(Payload([0xAA; 16]));
    unsafe { list.push_back(&mut item) };

    assert_eq!(list.len(), 1);
}

#[test]
fn test_debug_formatting() {
    let mut list = StaticList::new();
    let mut first = Item::new(1);
    let mut second = Item::new(2);

    unsafe { list.push_back(&mut first) };
    unsafe { list.push_back(&mut second) };

    assert_eq!(format!("{list:?}"), "[1, 2]");
    assert_eq!(format!("{first:?}"), "Item { value: 1, linked: true }");
}
