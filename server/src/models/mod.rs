pub mod station;
pub mod ticket;
pub mod transport;
pub mod verification;

pub use station::{Area, Station};
pub use ticket::{Ticket, TicketState};
pub use transport::Transport;
pub use verification::VerificationRecord;
