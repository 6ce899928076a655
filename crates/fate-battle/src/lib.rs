//! `fate-battle` — everything between "two agents met" and "one of them died".
//!
//! # Pipeline
//!
//! ```text
//! movement tick (roster write lock held)
//!   └─ scan()            pairwise range + dominance check
//!        └─ BattleQueue::push(BattleTask)
//!                                   ...
//! battle worker
//!   └─ BattleQueue::pop_timeout()
//!        └─ BattleResolver::resolve()
//!             Dequeued → Validated → Kill | NoKill | Stale
//!                                     └─ attacker.notify_kill(KillEvent)
//! ```
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`task`]        | `BattleTask`                                          |
//! | [`queue`]       | `BattleQueue` (blocking FIFO with stop/drain)         |
//! | [`collision`]   | `scan`, `engagement`, `ScanReport`                    |
//! | [`resolver`]    | `BattleResolver`, `Resolution`, `attacker_wins`       |

pub mod collision;
pub mod queue;
pub mod resolver;
pub mod task;


pub use collision::{ScanReport, engagement, scan};
pub use queue::BattleQueue;
pub use resolver::{BattleResolver, Resolution, attacker_wins};
pub use task::BattleTask;
