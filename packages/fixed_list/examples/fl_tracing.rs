//! Shows the diagnostic events a `FixedList` emits when a `tracing` subscriber is installed.
//!
//! Every event carries the list name given to the builder, the arena index of the node that
//! was touched and the resulting length.

use fixed_list::FixedList;
use tracing::Level;

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let jobs = [101_u32, 102, 103];

    let mut queue = FixedList::<u32, 2>::builder().name("job_queue").build();

    for job in &jobs {
        if queue.append(job).is_err() {
            // Make room by dropping the oldest job, then try again.
            _ = queue.pop();
            queue.append(job).unwrap();
        }
    }

    while let Some(job) = queue.pop() {
        println!("Processing job {job}");
    }
}
