extern crate futures;

use crate::{client::ApiClient, config::api::PAGE_SIZE, error::Result, types::Submission};
use futures::stream::{self, Stream};
use std::collections::VecDeque;

struct Cursor<'a> {
    api: &'a ApiClient,
    handle: &'a str,
    from: u32,
    page: VecDeque<Submission>,
}
impl<'a> Cursor<'a> {
    async fn advance(mut self) -> Result<Option<(Submission, Self)>> {
        loop {
            while let Some(s) = self.page.pop_front() {
                if s.is_eligible() {
                    return Ok(Some((s, self)));
                }
            }
            let page = self.api.user_status(self.handle, self.from, PAGE_SIZE).await?;
            // The API has no "more" flag; only an empty page ends the history.
            if page.is_empty() {
                return Ok(None);
            }
            self.from += page.len() as u32;
            self.page = page.into();
        }
    }
}

/// Accepted submissions of `handle` that belong to a contest, in the order
/// the API lists them, fetched one page at a time as the stream is polled.
pub fn accepted<'a>(api: &'a ApiClient, handle: &'a str) -> impl Stream<Item = Result<Submission>> + 'a {
    stream::try_unfold(
        Cursor {
            api,
            handle,
            from: 1,
            page: VecDeque::new(),
        },
        Cursor::advance,
    )
}
