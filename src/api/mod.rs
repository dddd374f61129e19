//! API service modules for Busha Commerce endpoints.
//!
//! Each service is a thin handle over the shared client that formats
//! paths and forwards to the dispatch layer.

mod addresses;
mod charges;
mod checkouts;
mod events;
mod invoices;
mod payment_links;

pub use addresses::AddressesService;
pub use charges::ChargesService;
pub use checkouts::CheckoutsService;
pub use events::EventsService;
pub use invoices::InvoicesService;
pub use payment_links::PaymentLinksService;
