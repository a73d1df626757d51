use log::debug;

use crate::outline::types::{OutlineEntry, OutlineNode};

/// Structural step produced while nesting a heading sequence.
///
/// Every `OpenList` is matched by a `CloseList` and every `OpenItem` by a
/// `CloseItem`, whatever the input levels look like.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlineEvent {
    OpenList,
    /// Start a list item linking to the entry at this index
    OpenItem(usize),
    CloseItem,
    CloseList,
}

/// Walk headings in document order and emit the list structure they imply.
///
/// A stack of open levels drives the nesting: a deeper heading opens one new
/// list (however many levels it skips), a heading at or above the current
/// level closes the current item and then one list per open level that is
/// deeper than itself. When that unwinding empties the stack, the heading
/// starts a fresh top-level list.
pub fn nesting_events(entries: &[OutlineEntry]) -> Vec<OutlineEvent> {
    let mut events = Vec::with_capacity(entries.len() * 4);
    let mut open_levels: Vec<u8> = Vec::new();

    for (index, entry) in entries.iter().enumerate() {
        match open_levels.last() {
            Some(&top) if entry.level <= top => {
                events.push(OutlineEvent::CloseItem);

                while let Some(&top) = open_levels.last() {
                    if entry.level >= top {
                        break;
                    }
                    open_levels.pop();
                    events.push(OutlineEvent::CloseList);
                    // The closed list hangs off an item of the parent list
                    if !open_levels.is_empty() {
                        events.push(OutlineEvent::CloseItem);
                    }
                }

                if open_levels.is_empty() {
                    open_levels.push(entry.level);
                    events.push(OutlineEvent::OpenList);
                }
            }
            _ => {
                open_levels.push(entry.level);
                events.push(OutlineEvent::OpenList);
            }
        }

        events.push(OutlineEvent::OpenItem(index));
    }

    while open_levels.pop().is_some() {
        events.push(OutlineEvent::CloseItem);
        events.push(OutlineEvent::CloseList);
    }

    debug!("Nested {} headings into {} outline events", entries.len(), events.len());
    events
}

/// Fold nesting events into the outline tree.
///
/// Returns the children of the implicit root.
pub fn build_tree(entries: &[OutlineEntry], events: &[OutlineEvent]) -> Vec<OutlineNode> {
    let mut root: Vec<OutlineNode> = Vec::new();
    let mut lists: Vec<Vec<OutlineNode>> = Vec::new();

    for event in events {
        match *event {
            OutlineEvent::OpenList => lists.push(Vec::new()),
            OutlineEvent::OpenItem(index) => {
                let entry = &entries[index];
                let node = OutlineNode::new(entry.anchor.clone(), entry.text.clone());
                match lists.last_mut() {
                    Some(list) => list.push(node),
                    None => root.push(node),
                }
            }
            OutlineEvent::CloseItem => {}
            OutlineEvent::CloseList => {
                let Some(closed) = lists.pop() else { continue };
                match lists.last_mut().and_then(|list| list.last_mut()) {
                    Some(owner) => owner.children.extend(closed),
                    None => root.extend(closed),
                }
            }
        }
    }

    root
}

/// Nest a flat heading sequence into an outline tree
pub fn nest(entries: &[OutlineEntry]) -> Vec<OutlineNode> {
    let events = nesting_events(entries);
    build_tree(entries, &events)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entries(levels: &[u8]) -> Vec<OutlineEntry> {
        levels
            .iter()
            .enumerate()
            .map(|(i, &level)| OutlineEntry {
                level,
                anchor: format!("h{}", i),
                text: format!("Heading {}", i),
            })
            .collect()
    }

    fn assert_balanced(events: &[OutlineEvent]) {
        let mut lists = 0i32;
        let mut items = 0i32;
        for event in events {
            match event {
                OutlineEvent::OpenList => lists += 1,
                OutlineEvent::CloseList => lists -= 1,
                OutlineEvent::OpenItem(_) => items += 1,
                OutlineEvent::CloseItem => items -= 1,
            }
            assert!(lists >= 0 && items >= 0, "closed more than opened: {:?}", events);
        }
        assert_eq!(lists, 0, "unbalanced lists: {:?}", events);
        assert_eq!(items, 0, "unbalanced items: {:?}", events);
    }

    #[test]
    fn test_single_heading() {
        let input = entries(&[2]);
        let events = nesting_events(&input);
        assert_eq!(
            events,
            vec![
                OutlineEvent::OpenList,
                OutlineEvent::OpenItem(0),
                OutlineEvent::CloseItem,
                OutlineEvent::CloseList,
            ]
        );

        let tree = build_tree(&input, &events);
        assert_eq!(tree.len(), 1);
        assert!(tree[0].children.is_empty());
    }

    #[test]
    fn test_group_then_sibling() {
        let tree = nest(&entries(&[2, 3, 3, 2]));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].anchor, "h0");
        assert_eq!(tree[0].children.len(), 2);
        assert_eq!(tree[0].children[1].anchor, "h2");
        assert_eq!(tree[1].anchor, "h3");
        assert!(tree[1].children.is_empty());
    }

    #[test]
    fn test_start_below_top_level_opens_one_list() {
        let events = nesting_events(&entries(&[4]));
        let opened = events.iter().filter(|e| **e == OutlineEvent::OpenList).count();
        assert_eq!(opened, 1);
    }

    #[test]
    fn test_skipped_levels_open_one_list() {
        let tree = nest(&entries(&[2, 5, 5]));
        assert_eq!(tree.len(), 1);
        assert_eq!(tree[0].children.len(), 2);
        assert!(tree[0].children.iter().all(|c| c.children.is_empty()));
    }

    #[test]
    fn test_non_monotonic_sequence() {
        // The h3 only closes the h4 list; it becomes a sibling of the h2
        let tree = nest(&entries(&[2, 4, 3]));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].children.len(), 1);
        assert_eq!(tree[0].children[0].anchor, "h1");
        assert_eq!(tree[1].anchor, "h2");
    }

    #[test]
    fn test_shallower_than_first_heading_starts_new_top_level() {
        let input = entries(&[3, 2]);
        let events = nesting_events(&input);
        assert_balanced(&events);

        let tree = build_tree(&input, &events);
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[1].anchor, "h1");
    }

    #[test]
    fn test_deep_unwind() {
        let tree = nest(&entries(&[2, 3, 4, 5, 2]));
        assert_eq!(tree.len(), 2);
        assert_eq!(tree[0].depth(), 4);
        assert_eq!(tree[0].count(), 4);
    }

    #[test]
    fn test_empty_input() {
        let events = nesting_events(&[]);
        assert!(events.is_empty());
        assert!(build_tree(&[], &events).is_empty());
    }

    #[test]
    fn test_balanced_for_assorted_sequences() {
        let sequences: [&[u8]; 9] = [
            &[2],
            &[2, 3, 3, 2],
            &[4],
            &[6, 5, 4, 3, 2],
            &[2, 6, 3, 5, 4],
            &[3, 2, 3, 2, 6, 2],
            &[2, 2, 2],
            &[5, 3, 6, 2, 4, 4, 3],
            &[1, 6, 1, 6],
        ];

        for levels in sequences {
            let input = entries(levels);
            let events = nesting_events(&input);
            assert_balanced(&events);

            let tree = build_tree(&input, &events);
            let total: usize = tree.iter().map(OutlineNode::count).sum();
            assert_eq!(total, levels.len(), "lost headings for {:?}", levels);
        }
    }
}
