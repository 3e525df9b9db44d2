use sn_client::{Notice, Route, render};

use std::process::ExitCode;

use serde::Serialize;
use serde_json::{Value, json};

/// What a command prints, in both output modes.
pub(crate) struct Outcome {
    ok: bool,
    text: String,
    json: Value,
}

impl Outcome {
    pub(crate) fn success(text: String, json: Value) -> Self {
        Self {
            ok: true,
            text,
            json,
        }
    }

    pub(crate) fn failure(text: String, json: Value) -> Self {
        Self {
            ok: false,
            text,
            json,
        }
    }

    pub(crate) fn redirect(route: Route) -> Self {
        Self::failure(
            "Not logged in. Run `sn register` or `sn login` first.".to_string(),
            json!({ "redirect": route.path() }),
        )
    }

    /// Shows `text` plus the notice, failing when the notice is an error.
    pub(crate) fn with_notice(notice: Option<&Notice>, text: String, data: Value) -> Self {
        let json = json!({ "notice": notice, "data": data });

        match notice {
            Some(n) if n.is_error() => Self::failure(format!("{text}{}", render::notice(n)), json),
            Some(n) => Self::success(format!("{}\n{text}", render::notice(n)), json),
            None => Self::success(text, json),
        }
    }

    pub(crate) fn emit(self, as_json: bool, pretty: bool) -> ExitCode {
        if as_json {
            let output = if pretty {
                serde_json::to_string_pretty(&self.json)
            } else {
                serde_json::to_string(&self.json)
            };

            match output {
                Ok(json) => println!("{json}"),
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    return ExitCode::FAILURE;
                }
            }
        } else if self.ok {
            print!("{}", ensure_newline(self.text));
        } else {
            eprint!("{}", ensure_newline(self.text));
        }

        if self.ok {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Value {
    serde_json::to_value(value).unwrap_or_default()
}

fn ensure_newline(mut text: String) -> String {
    if !text.ends_with('\n') {
        text.push('\n');
    }
    text
}
