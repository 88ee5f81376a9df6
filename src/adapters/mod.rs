//! Adapters: in-process implementations of the hexagonal port traits.
//!
//! | Adapter             | Implements         | Backed by                 |
//! |---------------------|--------------------|---------------------------|
//! | `memory_repository` | SecurityRepository | id-ordered `BTreeMap`     |
//! | `image`             | ImageAnalyzer      | fixed, settable verdict   |
//! | `log_sink`          | StatusListener     | `log` facade              |
//! | `event_log`         | StatusListener     | bounded `heapless::Deque` |

pub mod event_log;
pub mod image;
pub mod log_sink;
pub mod memory_repository;
