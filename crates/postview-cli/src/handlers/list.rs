use anyhow::Result;
use postview_runtime::PostSource;

use crate::context::ExecutionContext;
use crate::presentation::Renderer;
use crate::presentation::presenters::present_post_list;

pub fn handle(ctx: &ExecutionContext, limit: Option<usize>) -> Result<()> {
    let source = ctx.source()?;
    let posts = ctx.runtime()?.block_on(source.fetch())?;

    let result = present_post_list(&posts, &source.describe(), limit, ctx.title_width());
    ctx.renderer().render(result)
}
