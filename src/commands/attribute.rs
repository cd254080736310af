use eyre::Result;
use huisbot_util::{
    numbers::Decimals,
    osu::{AttributeKind, GameMods},
};
use serde::Serialize;

use super::{print_json, print_lines, ModsArgs, ModsLabel, OutputArgs};

#[derive(clap::Args)]
pub struct Args {
    /// One of `ar`, `cs`, `hp`, `od`
    kind: AttributeKind,
    #[arg(allow_negative_numbers = true)]
    value: f64,
    #[command(flatten)]
    mods: ModsArgs,
    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Serialize)]
struct AttributeOutput<'a> {
    kind: &'static str,
    mods: &'a GameMods,
    value: f64,
    adjusted: f64,
    preempt_ms: Option<i32>,
    adjusted_preempt_ms: Option<i32>,
}

pub fn run(args: Args) -> Result<()> {
    let mods = args.mods.resolve();
    let adjusted = args.kind.adjust(args.value, &mods);

    info!(kind = %args.kind, value = args.value, %mods, adjusted, "Adjusted attribute");

    let output = AttributeOutput {
        kind: args.kind.as_str(),
        mods: &mods,
        value: args.value,
        adjusted,
        preempt_ms: args.kind.preempt_ms(args.value),
        adjusted_preempt_ms: args.kind.preempt_ms(adjusted),
    };

    if args.output.json {
        return print_json(&output);
    }

    let title = format!("Adjusting {}", args.kind);
    let nm = field("NM", output.value, output.preempt_ms);
    let modded = field(ModsLabel(&mods), output.adjusted, output.adjusted_preempt_ms);

    print_lines([title, nm, modded])
}

fn field(name: impl std::fmt::Display, value: f64, ms: Option<i32>) -> String {
    match ms {
        Some(ms) => format!("{name}: {} ({ms}ms)", Decimals::<1>(value)),
        None => format!("{name}: {}", Decimals::<1>(value)),
    }
}
