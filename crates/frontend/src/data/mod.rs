pub mod rest;

use datastore::FaqRepository;
use rest::RestStore;

/// Repository handle over the live HTTP transport. Cheap to construct; each
/// view makes its own and keeps its own local copy of the fetched data.
pub fn repository() -> FaqRepository<RestStore> {
    FaqRepository::new(RestStore)
}
