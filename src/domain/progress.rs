use log::info;

/// Track progress of a reconciliation pass over the skeleton
pub struct ReconcileProgress {
    total: usize,
    written: usize,
    unchanged: usize,
    failed: usize,
}

impl ReconcileProgress {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            written: 0,
            unchanged: 0,
            failed: 0,
        }
    }

    pub fn increment_written(&mut self) {
        self.written += 1;
        self.log_progress();
    }

    pub fn increment_unchanged(&mut self) {
        self.unchanged += 1;
        self.log_progress();
    }

    pub fn increment_failed(&mut self) {
        self.failed += 1;
        self.log_progress();
    }

    pub fn current_count(&self) -> usize {
        self.written + self.unchanged + self.failed
    }

    fn log_progress(&self) {
        let current = self.current_count();
        if should_log(current, self.total) {
            info!(
                "  → Progress: {}/{} ({} written, {} unchanged, {} failed)",
                current, self.total, self.written, self.unchanged, self.failed
            );
        }
    }
}

fn should_log(current: usize, total: usize) -> bool {
    is_milestone(current) || is_complete(current, total)
}

fn is_milestone(count: usize) -> bool {
    count % 10 == 0
}

fn is_complete(current: usize, total: usize) -> bool {
    current == total
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_every_outcome() {
        let mut progress = ReconcileProgress::new(3);
        progress.increment_written();
        progress.increment_unchanged();
        progress.increment_failed();
        assert_eq!(progress.current_count(), 3);
    }

    #[test]
    fn test_logs_on_milestones_and_completion() {
        assert!(should_log(10, 25));
        assert!(should_log(25, 25));
        assert!(!should_log(7, 25));
    }
}
