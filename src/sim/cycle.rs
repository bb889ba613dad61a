//! Floyd tortoise-and-hare cycle detection
//!
//! Works over any singly-linked successor chain: the caller supplies a node
//! handle and an accessor that yields the next handle. Nothing here knows
//! about cells or boards, so the detector can be tested against synthetic
//! chains. O(n) steps for an n-node reachable chain, O(1) extra space.

/// Returns true iff following `successor` from `start` revisits a node
/// before reaching a dead end.
///
/// `None` as the start is vacuously loop-free, as is a single node whose
/// successor is absent. A node that links to itself loops immediately.
pub fn will_loop<N, F>(start: Option<N>, mut successor: F) -> bool
where
    N: Copy + Eq,
    F: FnMut(N) -> Option<N>,
{
    let Some(start) = start else {
        return false;
    };

    let mut tortoise = start;
    let mut hare = start;

    loop {
        // Tortoise moves one link, hare two; if the hare falls off the end
        // the chain terminates.
        tortoise = match successor(tortoise) {
            Some(next) => next,
            None => return false,
        };
        hare = match successor(hare).and_then(&mut successor) {
            Some(next) => next,
            None => return false,
        };

        if tortoise == hare {
            return true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Successor accessor over an index-linked table
    fn table_next(table: &[Option<usize>]) -> impl FnMut(usize) -> Option<usize> + '_ {
        |i| table[i]
    }

    #[test]
    fn test_empty_chain_does_not_loop() {
        assert!(!will_loop(None::<usize>, |_| None));
    }

    #[test]
    fn test_single_dead_end() {
        let table = [None];
        assert!(!will_loop(Some(0), table_next(&table)));
    }

    #[test]
    fn test_self_loop() {
        let table = [Some(0)];
        assert!(will_loop(Some(0), table_next(&table)));
    }

    #[test]
    fn test_terminating_chain() {
        // 0 -> 1 -> 2 -> 3 -> off the end
        let table = [Some(1), Some(2), Some(3), None];
        assert!(!will_loop(Some(0), table_next(&table)));
    }

    #[test]
    fn test_tail_into_cycle() {
        // 0 -> 1 -> 2 -> 3 -> 1
        let table = [Some(1), Some(2), Some(3), Some(1)];
        assert!(will_loop(Some(0), table_next(&table)));
        // Starting inside the cycle loops too
        assert!(will_loop(Some(2), table_next(&table)));
    }

    #[test]
    fn test_two_node_cycle() {
        let table = [Some(1), Some(0)];
        assert!(will_loop(Some(0), table_next(&table)));
    }

    #[test]
    fn test_long_chain_terminates() {
        // 999 forward links then a dead end; must finish without a
        // visited-set and report no loop
        let mut table: Vec<Option<usize>> = (1..1000).map(Some).collect();
        table.push(None);
        assert!(!will_loop(Some(0), table_next(&table)));
    }

    #[test]
    fn test_long_tail_long_cycle() {
        // 500-node tail into a 500-node cycle
        let mut table: Vec<Option<usize>> = (1..1000).map(Some).collect();
        table.push(Some(500));
        assert!(will_loop(Some(0), table_next(&table)));
    }
}
