use std::io::{BufRead, Write};

use rand::Rng;

use crate::catalog::lookup;
use crate::client::{CompletionBackend, CompletionClient};
use crate::error::AppError;
use crate::output::{
    FOOTER, INTRO, TITLE, output_catalog_json, output_result_json, render_catalog, render_result,
};
use crate::session::{FormInput, SessionState, on_explain, on_surprise};

const ACTION_PROMPT: &str = "\n[e] Explain It  [s] Surprise Me  [l] List  [q] Quit: ";
const PICK_PROMPT: &str = "Pick a popular crypto (#, name or blank): ";
const CUSTOM_PROMPT: &str = "Or type your own (e.g. Uniswap, Arweave, dYdX): ";

pub(crate) struct CommandContext {
    pub(crate) json: bool,
    pub(crate) use_color: bool,
}

/// Transient "in progress" line shown while a call is blocking
fn explain_progress(state: &SessionState) {
    eprintln!("Thinking about {}...", state.name);
}

fn surprise_progress(state: &SessionState) {
    eprintln!("Explaining {}...", state.name);
}

fn print_state(state: &SessionState, ctx: &CommandContext) {
    if ctx.json {
        println!("{}", output_result_json(state));
    } else {
        println!("{}", render_result(state, ctx.use_color));
        println!("{FOOTER}");
    }
}

pub(crate) fn handle_list(ctx: &CommandContext) {
    if ctx.json {
        println!("{}", output_catalog_json());
    } else {
        println!("{}", render_catalog(ctx.use_color));
    }
}

pub(crate) fn handle_explain<B: CompletionBackend>(
    client: &CompletionClient<B>,
    name: &str,
    pick: Option<&str>,
    ctx: &CommandContext,
) -> Result<(), AppError> {
    let selected = lookup(pick.unwrap_or_default())?;
    let form = FormInput::new(selected, name);
    let state = on_explain(SessionState::default(), &form, client, &mut explain_progress);
    print_state(&state, ctx);
    Ok(())
}

pub(crate) fn handle_surprise<B: CompletionBackend, R: Rng + ?Sized>(
    client: &CompletionClient<B>,
    rng: &mut R,
    ctx: &CommandContext,
) {
    let state = on_surprise(SessionState::default(), rng, client, &mut surprise_progress);
    print_state(&state, ctx);
}

/// Print `prompt` and read one trimmed line; `None` at end of input
fn ask<I: BufRead, W: Write>(
    input: &mut I,
    out: &mut W,
    prompt: &str,
) -> Result<Option<String>, AppError> {
    write!(out, "{prompt}")?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Terminal form: pick a preset or type a name, then explain or get a surprise.
///
/// Loops until the user quits or input ends, returning the final session state.
pub(crate) fn run_interactive<B, I, W, R>(
    client: &CompletionClient<B>,
    input: &mut I,
    out: &mut W,
    rng: &mut R,
    use_color: bool,
) -> Result<SessionState, AppError>
where
    B: CompletionBackend,
    I: BufRead,
    W: Write,
    R: Rng + ?Sized,
{
    writeln!(out, "{TITLE}\n\n{INTRO}\n")?;
    writeln!(out, "🔎 Choose or enter a crypto to explore")?;
    writeln!(out, "{}", render_catalog(use_color))?;

    let mut state = SessionState::default();
    loop {
        let Some(action) = ask(input, out, ACTION_PROMPT)? else {
            break;
        };

        state = match action.to_lowercase().as_str() {
            "" | "e" | "explain" => {
                let Some(pick) = ask(input, out, PICK_PROMPT)? else {
                    break;
                };
                let selected = match lookup(&pick) {
                    Ok(selected) => selected,
                    Err(e) => {
                        writeln!(out, "{e}")?;
                        continue;
                    }
                };
                let Some(custom) = ask(input, out, CUSTOM_PROMPT)? else {
                    break;
                };
                let form = FormInput::new(selected, custom);
                on_explain(state, &form, client, &mut explain_progress)
            }
            "s" | "surprise" => on_surprise(state, rng, client, &mut surprise_progress),
            "l" | "list" => {
                writeln!(out, "{}", render_catalog(use_color))?;
                continue;
            }
            "q" | "quit" | "exit" => break,
            other => {
                writeln!(out, "Unknown choice \"{other}\"")?;
                continue;
            }
        };

        if state.has_result() {
            writeln!(out, "{}", render_result(&state, use_color))?;
        }
    }

    writeln!(out, "\n{FOOTER}")?;
    Ok(state)
}
