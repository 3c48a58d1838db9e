use super::LogBuffer;

#[test]
fn keeps_only_the_most_recent_entries() {
    for capacity in [1usize, 3, 100] {
        for extra in [0usize, 1, 7, 250] {
            let mut buffer = LogBuffer::new(capacity);
            let total = capacity + extra;
            for value in 0..total {
                buffer.insert(value);
            }

            let expected: Vec<usize> = (total - capacity..total).collect();
            assert_eq!(buffer.to_vec(), expected, "capacity {capacity}, extra {extra}");
            assert_eq!(buffer.len(), capacity);
        }
    }
}

#[test]
fn partially_filled_buffer_keeps_everything() {
    let mut buffer = LogBuffer::new(5);
    buffer.insert("a".to_string());
    buffer.insert("b".to_string());

    assert_eq!(buffer.len(), 2);
    assert_eq!(buffer.last().map(String::as_str), Some("b"));
    assert_eq!(buffer.iter().cloned().collect::<Vec<_>>(), vec!["a", "b"]);
}

#[test]
fn duplicates_are_retained() {
    let mut buffer = LogBuffer::new(3);
    for _ in 0..3 {
        buffer.insert("same");
    }
    assert_eq!(buffer.to_vec(), vec!["same"; 3]);
}

#[test]
fn zero_capacity_stores_nothing() {
    let mut buffer = LogBuffer::new(0);
    buffer.insert(1);
    assert!(buffer.is_empty());
}

#[test]
fn default_capacity_is_one_hundred() {
    let buffer: LogBuffer = LogBuffer::default();
    assert_eq!(buffer.capacity(), 100);
}
