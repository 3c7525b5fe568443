use anyhow::Result;
use postview_runtime::{Error, PostSource};
use postview_types::{PostId, find_post};

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_post_detail;

pub fn handle(ctx: &ExecutionContext, id: u64) -> Result<()> {
    let id = PostId::new(id);
    let source = ctx.source()?;
    let posts = ctx.runtime()?.block_on(source.fetch())?;

    let post = find_post(&posts, id).ok_or(Error::NotFound(id))?;

    ctx.renderer().render(present_post_detail(post))
}
