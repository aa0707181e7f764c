//! Line-oriented prompt loop.
//!
//! Every input line replaces the prompt and submits it. The view is redrawn
//! whenever the phase or the current request changes.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::{Phase, RequestId, ViewState, render};
use crate::cli::error::CliResult;
use crate::cli::render::format_view;
use crate::client::Generator;
use crate::controller::Controller;

const QUIT: &str = ":q";
const BUSY: &str = "Still generating; wait for the current request to finish.";

pub async fn interactive<G, R, W>(
    controller: &Controller<G>,
    input: R,
    mut output: W,
) -> CliResult<()>
where
    G: Generator,
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    let mut updates = controller.subscribe();
    let mut drawn = draw_key(&updates.borrow_and_update());
    let mut input_open = true;

    let view = controller.view();
    write_block(
        &mut output,
        &format!("{}\n{} ({} to quit)", view.title, view.placeholder, QUIT),
    )
    .await?;

    loop {
        tokio::select! {
            line = lines.next_line(), if input_open => {
                let Some(line) = line? else {
                    // Let an outstanding request finish before leaving
                    input_open = false;
                    let state = updates.borrow_and_update().clone();
                    draw(&mut output, &state, &mut drawn).await?;
                    if !state.is_loading() {
                        break;
                    }
                    continue;
                };

                if line.trim() == QUIT {
                    break;
                }
                if !controller.view().submit.enabled {
                    write_block(&mut output, BUSY).await?;
                    continue;
                }
                controller.set_prompt(line);
                // A blank line is a no-op
                let _ = controller.submit();
            }
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let state = updates.borrow_and_update().clone();
                draw(&mut output, &state, &mut drawn).await?;
                if !input_open && !state.is_loading() {
                    break;
                }
            }
        }
    }

    controller.detach();
    Ok(())
}

fn draw_key(state: &ViewState) -> (Option<RequestId>, Phase) {
    (state.current_request(), state.phase())
}

/// Redraw `state` unless its key matches the last one drawn.
async fn draw<W: AsyncWrite + Unpin>(
    output: &mut W,
    state: &ViewState,
    drawn: &mut (Option<RequestId>, Phase),
) -> CliResult<()> {
    let key = draw_key(state);
    if key == *drawn {
        return Ok(());
    }
    *drawn = key;

    let text = format_view(&render(state));
    if !text.is_empty() {
        write_block(output, &text).await?;
    }
    Ok(())
}

async fn write_block<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> CliResult<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n\n").await?;
    output.flush().await?;
    Ok(())
}
