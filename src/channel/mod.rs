/*!
 * Exchange Channel
 * Named single-use byte channel between the supervisor and the scorer
 */

mod fifo;
mod types;

pub use fifo::ExchangeChannel;
pub use types::{ChannelError, ChannelResult};
