//! Minimal CLI: schema | types | message
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;

use blockkit::ir::FieldDefault;
use blockkit::schema::{self, ACTIONS, BUTTON, CONTEXT, DIVIDER, HEADER, MARKDOWN, MESSAGE, SECTION, TEXT};
use blockkit::{Args, Node, NodeType, Value};

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// build Block Kit payloads and inspect the built-in node type declarations
#[derive(Parser, Debug)]
#[command(name = "blockkit", version)]
pub struct CommandLineInterface {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// print the JSON-schema-ish description of the node types
    Schema(SchemaOut),
    /// list the node types with their fields
    Types,
    /// compose a message and print its JSON payload
    Message(MessageOut),
}

#[derive(ClapArgs, Debug, Clone)]
struct OutputSettings {
    /// output .json file (stdout if omitted)
    #[arg(short, long)]
    out: Option<PathBuf>,
}

#[derive(clap::Parser, Debug)]
struct SchemaOut {
    /// only describe these node types (repeatable)
    #[arg(long = "type", value_name = "NAME")]
    node_types: Vec<String>,

    /// single-line output
    #[arg(long, default_value_t = false)]
    compact: bool,

    #[command(flatten)]
    output: OutputSettings,
}

#[derive(clap::Parser, Debug)]
struct MessageOut {
    /// channel to post to
    #[arg(long)]
    channel: String,

    /// fallback text shown in notifications
    #[arg(long)]
    text: Option<String>,

    /// header block at the top
    #[arg(long)]
    header: Option<String>,

    /// markdown section block (repeatable, kept in order)
    #[arg(long)]
    section: Vec<String>,

    /// put a divider between consecutive sections
    #[arg(long, default_value_t = false)]
    divider: bool,

    /// context line under the sections
    #[arg(long)]
    context: Option<String>,

    /// button as LABEL=ACTION_ID (repeatable, collected into one actions block)
    #[arg(long, value_parser = parse_button)]
    button: Vec<(String, String)>,

    /// reply in this thread
    #[arg(long)]
    thread_ts: Option<String>,

    /// indent the JSON output
    #[arg(long, default_value_t = false)]
    pretty: bool,

    #[command(flatten)]
    output: OutputSettings,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl OutputSettings {
    fn emit(&self, source: &str) -> Result<()> {
        match self.out.as_ref() {
            Some(out) => write_file(out, source),
            None => {
                println!("{source}");
                Ok(())
            }
        }
    }
}

impl SchemaOut {
    fn selected(&self) -> Result<Vec<&'static NodeType>> {
        if self.node_types.is_empty() {
            return Ok(schema::all().to_vec());
        }
        self.node_types
            .iter()
            .map(|name| schema::lookup(name).with_context(|| format!("unknown node type: {name}")))
            .collect()
    }
}

impl MessageOut {
    fn compose(&self) -> Result<Node> {
        let mut blocks = Vec::<Node>::new();
        if let Some(header) = self.header.as_deref() {
            blocks.push(HEADER.construct(Args::new().arg(header))?);
        }
        for (i, section) in self.section.iter().enumerate() {
            if i > 0 && self.divider {
                blocks.push(DIVIDER.empty()?);
            }
            let text = TEXT.construct(Args::new().arg(section.as_str()).arg(MARKDOWN))?;
            blocks.push(SECTION.construct(Args::new().kw("text", text))?);
        }
        if let Some(context) = self.context.as_deref() {
            blocks.push(CONTEXT.construct(Args::new().arg(vec![Value::from(context)]))?);
        }
        if !self.button.is_empty() {
            let buttons = self
                .button
                .iter()
                .map(|(label, action_id)| BUTTON.construct(Args::new().arg(label.as_str()).arg(action_id.as_str())))
                .collect::<Result<Vec<_>, _>>()?;
            blocks.push(ACTIONS.construct(Args::new().arg(buttons))?);
        }

        let mut args = Args::new()
            .arg(self.channel.as_str())
            .kw_opt("text", self.text.as_deref())
            .kw_opt("thread_ts", self.thread_ts.as_deref());
        if !blocks.is_empty() {
            args = args.kw("blocks", blocks);
        }
        Ok(MESSAGE.construct(args)?)
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Schema(target) => {
                let types = target.selected()?;
                let described = blockkit::describe::describe_all(&types);
                let source = if target.compact {
                    serde_json::to_string(&described)?
                } else {
                    serde_json::to_string_pretty(&described)?
                };
                target.output.emit(&source)
            }
            Command::Types => {
                for ty in schema::all() {
                    println!("{}", type_listing(ty));
                }
                Ok(())
            }
            Command::Message(target) => {
                let message = target.compose()?;
                let blocks = message.get("blocks").and_then(Value::as_list).map_or(0, |b| b.len());
                tracing::debug!(blocks, "composed message");
                let source = if target.pretty {
                    message.to_json_string_pretty()
                } else {
                    message.to_json_string()
                };
                target.output.emit(&source)
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

fn parse_button(s: &str) -> Result<(String, String), String> {
    match s.split_once('=') {
        Some((label, action_id)) if !label.is_empty() && !action_id.is_empty() => {
            Ok((label.to_owned(), action_id.to_owned()))
        }
        _ => Err(format!("expected LABEL=ACTION_ID, got `{s}`")),
    }
}

fn type_listing(ty: &NodeType) -> String {
    let mut lines = vec![match ty.discriminator() {
        Some(d) => format!("{} {} {}", ty.name().bold(), ty.category().name().dimmed(), format!("type={d:?}").green()),
        None => format!("{} {}", ty.name().bold(), ty.category().name().dimmed()),
    }];
    for field in ty.fields() {
        let name = match &field.default {
            FieldDefault::Required => field.name.to_owned(),
            FieldDefault::Absent => format!("{}?", field.name),
            FieldDefault::Value(v) => format!("{}={}", field.name, v.to_json()),
        };
        lines.push(format!("    {name}: {}", field.ty.to_string().cyan()));
    }
    lines.join("\n")
}

fn write_file(out: &Path, source: &str) -> Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(out, source).with_context(|| format!("failed to write {}", out.display()))
}
