//! Deferred message queue
//!
//! Messages are keyed by due time in milliseconds on the host's clock plus a
//! sequence number, so equal due times fire in scheduling order.

use std::collections::BTreeMap;

use crate::messages::Msg;

#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BTreeMap<(u64, u64), Msg>,
    next_seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `msg` to fire at `due_ms`
    pub fn schedule(&mut self, due_ms: u64, msg: Msg) {
        self.queue.insert((due_ms, self.next_seq), msg);
        self.next_seq += 1;
    }

    /// Remove and return every message due at `now_ms`, oldest first
    ///
    /// Messages scheduled while the returned ones are being handled wait for
    /// the next call, even with a zero delay.
    pub fn take_due(&mut self, now_ms: u64) -> Vec<Msg> {
        let due: Vec<(u64, u64)> = self
            .queue
            .range(..=(now_ms, u64::MAX))
            .map(|(key, _)| *key)
            .collect();
        due.into_iter()
            .filter_map(|key| self.queue.remove(&key))
            .collect()
    }

    /// Due time of the earliest pending message
    pub fn next_due(&self) -> Option<u64> {
        self.queue.keys().next().map(|(due, _)| *due)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::DockArea;

    #[test]
    fn test_take_due_in_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(10, Msg::hide_area(DockArea::Top));
        scheduler.schedule(5, Msg::hide_area(DockArea::Left));
        scheduler.schedule(5, Msg::hide_area(DockArea::Right));

        assert_eq!(scheduler.next_due(), Some(5));
        assert_eq!(
            scheduler.take_due(5),
            vec![
                Msg::hide_area(DockArea::Left),
                Msg::hide_area(DockArea::Right)
            ]
        );
        assert_eq!(scheduler.len(), 1);
        assert!(scheduler.take_due(9).is_empty());
        assert_eq!(scheduler.take_due(10), vec![Msg::hide_area(DockArea::Top)]);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn test_take_due_at_max_time() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(u64::MAX, Msg::hide_area(DockArea::Bottom));
        assert_eq!(scheduler.take_due(u64::MAX).len(), 1);
    }
}
