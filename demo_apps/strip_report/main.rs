//! Strip Report
//!
//! Replays a recorded variant manifest through the stripper offline:
//!
//! ```text
//! strip_report <profiles.json> <manifest.json> [options]
//!
//!   --json               print the totals as JSON
//!   --features <bits>    override the aggregated feature mask (hex, e.g. 0x47)
//!   --platform <name>    only replay variants for this platform (e.g. gles20)
//!   --pass <name>        only replay units of this pass type (e.g. shadow_caster)
//!   --stage <name>       only replay units of this stage (e.g. fragment)
//! ```
//!
//! Set `RUST_LOG=debug` to see the per-rule breakdown of every unit.

use anyhow::{Context, bail};
use sieve::prelude::*;
use sieve::strip::VariantManifest;

#[derive(Default)]
struct Options {
    profiles: String,
    manifest: String,
    as_json: bool,
    features: Option<ShaderFeatures>,
    platform: Option<ShaderPlatform>,
    pass: Option<PassType>,
    stage: Option<ShaderStage>,
}

const USAGE: &str = "usage: strip_report <profiles.json> <manifest.json> \
    [--json] [--features <bits>] [--platform <name>] [--pass <name>] [--stage <name>]";

fn parse_features(text: &str) -> anyhow::Result<ShaderFeatures> {
    let digits = text.trim_start_matches("0x");
    let bits = u32::from_str_radix(digits, 16).with_context(|| format!("bad feature bits '{text}'"))?;
    Ok(ShaderFeatures::from_raw(bits)?)
}

fn parse_args() -> anyhow::Result<Options> {
    let mut options = Options::default();
    let mut positional = Vec::new();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        let mut value = || args.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--json" => options.as_json = true,
            "--features" => options.features = Some(parse_features(&value()?)?),
            "--platform" => options.platform = Some(value()?.parse()?),
            "--pass" => options.pass = Some(value()?.parse()?),
            "--stage" => options.stage = Some(value()?.parse()?),
            flag if flag.starts_with("--") => bail!("unknown option {flag}\n{USAGE}"),
            _ => positional.push(arg.clone()),
        }
    }

    let [profiles, manifest] = <[String; 2]>::try_from(positional).map_err(|_| anyhow::anyhow!(USAGE))?;
    options.profiles = profiles;
    options.manifest = manifest;
    Ok(options)
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = parse_args()?;

    let profiles = ProfileSet::load(&options.profiles)
        .with_context(|| format!("loading profiles from {}", options.profiles))?;
    let manifest = VariantManifest::load(&options.manifest)
        .with_context(|| format!("loading manifest from {}", options.manifest))?;

    let aggregator = FeatureAggregator::new(profiles);
    let Some(settings) = aggregator.build_settings() else {
        log::warn!("No default rendering profile; nothing will be stripped");
        return Ok(());
    };
    let features = options.features.unwrap_or_else(|| aggregator.supported_features());
    log::info!(
        "Supported features: {features:?} ({} units, {} variants)",
        manifest.units.len(),
        manifest.variant_count()
    );

    let stripper = ShaderStripper::default();
    let mut before = 0usize;
    let mut after = 0usize;
    let mut by_rule = [0usize; StripRule::COUNT];

    for entry in &manifest.units {
        if options.pass.is_some_and(|pass| pass != entry.pass)
            || options.stage.is_some_and(|stage| stage != entry.stage)
        {
            continue;
        }

        let mut candidates = entry.candidates(true);
        if let Some(platform) = options.platform {
            candidates.retain(|v| v.platform == platform);
        }

        let report = stripper.filter_with(features, settings, &entry.unit(), &mut candidates);

        before += report.before;
        after += report.after;
        for rule in StripRule::CHAIN {
            by_rule[rule.index()] += report.stripped_by(rule);
        }
    }

    let totals = StripReport {
        before,
        after,
        stripped_by_rule: by_rule,
    };

    if options.as_json {
        println!("{}", serde_json::to_string_pretty(&totals)?);
    } else {
        println!(
            "Remaining shader variants: {after}/{before} ({:.2}%)",
            totals.remaining_percentage()
        );
        for rule in StripRule::CHAIN {
            println!("  {:<24} {}", rule.name(), totals.stripped_by(rule));
        }
    }

    Ok(())
}
