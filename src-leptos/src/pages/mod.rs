//! Page components

mod home;
mod ticket_redirect;
mod tickets;

pub use home::Home;
pub use ticket_redirect::{redirect_target, TicketRedirect, TICKET_LIST_PATH};
pub use tickets::Tickets;
