use clap::Args;
use dicetwist_core::{
    generate, generate_seeded, ClassifiedRolls, DiceError, DiceResult, FaceClassifier,
    RollClassifier, RollConfig, RollResults, RollSnapshot, RollStats, SumClassifier,
    TupleClassifier, TwistedSumClassifier,
};
use serde::Serialize;
use tracing::info;

use crate::reports::{self, GroupEntry};

#[derive(Args, Debug, Clone)]
pub struct RollArgs {
    /// Roll declaration, `<rolls>*<dice>D<faces>`. Malformed declarations
    /// fall back to 1000*3D6.
    #[arg(short, long, default_value = "1000*3D6")]
    pub config: String,

    /// Seed for a reproducible batch.
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Sum ranges for classification, e.g. `3-6,7-12,13-18`. Defaults to an
    /// even split of the possible sum span.
    #[arg(short, long)]
    pub ranges: Option<String>,

    /// Classify with rayon across the roll range.
    #[arg(long, default_value_t = false)]
    pub parallel: bool,

    /// Emit the report as JSON instead of tables.
    #[arg(long, default_value_t = false)]
    pub json: bool,

    /// List the first rolls whose sum is at most this value.
    #[arg(long)]
    pub pick_sum_below: Option<u32>,

    /// How many picked rolls to list.
    #[arg(long, default_value_t = 10)]
    pub pick_limit: usize,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RollReport {
    config: RollConfig,
    seed: Option<u64>,
    overall: RollStats,
    per_die: Vec<RollStats>,
    sums: Vec<GroupEntry>,
    twisted_sums: Vec<GroupEntry>,
    faces: Vec<GroupEntry>,
    tuples: Vec<GroupEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    picked: Option<Vec<RollSnapshot>>,
}

pub fn run(args: RollArgs) -> DiceResult<()> {
    let config = RollConfig::parse(&args.config);
    info!("rolling {config}");

    let results = match args.seed {
        Some(seed) => generate_seeded(&config, seed),
        None => generate(&config),
    };

    let ranges = match &args.ranges {
        Some(spec) => parse_ranges(spec).map_err(DiceError::Config)?,
        None => default_ranges(&config),
    };

    let sums = classify(&results, &SumClassifier::new(ranges.clone()), args.parallel);
    let twisted = classify(
        &results,
        &TwistedSumClassifier::new(ranges),
        args.parallel,
    );
    let faces = classify(&results, &FaceClassifier, args.parallel);
    let tuples = classify(
        &results,
        &TupleClassifier::new(results.config()),
        args.parallel,
    );

    let overall = results.stats(None)?;
    let per_die = (0..config.dice_count())
        .map(|die| results.stats(Some(die)))
        .collect::<DiceResult<Vec<_>>>()?;

    let picked = args
        .pick_sum_below
        .map(|cap| results.pick(|view| view.sum() <= cap, args.pick_limit));

    let total_rolls = config.rolls() as u64;
    let total_dice = total_rolls * config.dice_count() as u64;
    let report = RollReport {
        config,
        seed: args.seed,
        overall,
        per_die,
        sums: reports::entries(&sums, total_rolls),
        twisted_sums: reports::entries(&twisted, total_rolls),
        faces: reports::entries(&faces, total_dice),
        tuples: reports::entries(&tuples, total_rolls),
        picked,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    reports::print_stats(&report.overall, &report.per_die);
    reports::print_classification("Sums", &report.sums);
    reports::print_classification("Twisted sums", &report.twisted_sums);
    reports::print_classification("Faces", &report.faces);
    reports::print_classification("Tuples (n-of-a-kind)", &report.tuples);
    if let Some(picked) = &report.picked {
        reports::print_picked(picked);
    }
    Ok(())
}

fn classify<C>(results: &RollResults, classifier: &C, parallel: bool) -> ClassifiedRolls<C::Group>
where
    C: RollClassifier + Sync,
    C::Group: Send,
{
    if parallel {
        results.par_classify(classifier)
    } else {
        results.classify(classifier)
    }
}

fn parse_ranges(spec: &str) -> Result<Vec<(u32, u32)>, String> {
    let mut ranges = Vec::new();
    for part in spec.split(',') {
        let part = part.trim();
        let (lo, hi) = part
            .split_once('-')
            .ok_or_else(|| format!("bad range {part:?}, expecting min-max"))?;
        let lo: u32 = lo
            .trim()
            .parse()
            .map_err(|_| format!("bad range start in {part:?}"))?;
        let hi: u32 = hi
            .trim()
            .parse()
            .map_err(|_| format!("bad range end in {part:?}"))?;
        if lo > hi {
            return Err(format!("empty range {part:?}"));
        }
        ranges.push((lo, hi));
    }
    Ok(ranges)
}

/// Split the possible sum span `[dice, dice * faces]` into up to six even
/// bands.
fn default_ranges(config: &RollConfig) -> Vec<(u32, u32)> {
    let lo = config.dice_count() as u32;
    let hi = lo * config.faces() as u32;
    let span = hi - lo + 1;
    let width = span.div_ceil(span.min(6));

    let mut ranges = Vec::new();
    let mut start = lo;
    while start <= hi {
        let end = (start + width - 1).min(hi);
        ranges.push((start, end));
        start = end + 1;
    }
    ranges
}
