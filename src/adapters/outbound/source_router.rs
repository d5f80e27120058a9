use crate::dependency_resolution::domain::SourceLocator;
use crate::ports::outbound::IndexFetcher;
use crate::shared::Result;

/// SourceRouter adapter dispatching a locator to the matching fetcher
///
/// Remote locators go to `remote`, local paths to `local`.
pub struct SourceRouter<R, L> {
    remote: R,
    local: L,
}

impl<R, L> SourceRouter<R, L>
where
    R: IndexFetcher,
    L: IndexFetcher,
{
    pub fn new(remote: R, local: L) -> Self {
        Self { remote, local }
    }
}

impl<R, L> IndexFetcher for SourceRouter<R, L>
where
    R: IndexFetcher,
    L: IndexFetcher,
{
    fn fetch(&self, locator: &SourceLocator) -> Result<Vec<u8>> {
        if locator.is_remote() {
            self.remote.fetch(locator)
        } else {
            self.local.fetch(locator)
        }
    }
}
