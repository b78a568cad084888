mod provenance;
mod report;

use std::path::PathBuf;
use std::time::Instant;

use acd::api::*;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use tracing::Level;
use tracing_subscriber::fmt::SubscriberBuilder;

use provenance::{write_sidecar, Payload};
use report::{format_line, result_path, ResultFile, Row};

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Worst-case reduction estimates for chord diagrams")]
struct Cmd {
    /// Log enumeration progress (debug level)
    #[arg(long, short)]
    verbose: bool,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Enumerate all diagrams for a range of sizes and write one result file per variant
    Estimate {
        #[arg(long, default_value_t = 1)]
        start_size: usize,
        #[arg(long, default_value_t = 5)]
        max_size: usize,
        #[arg(long, value_enum, default_value_t = VariantArg::Both)]
        variant: VariantArg,
        /// Skip the limit regime
        #[arg(long)]
        no_limit: bool,
        #[arg(long, default_value = "data/estimates")]
        out_dir: PathBuf,
        #[arg(long, default_value_t = EnumCfg::default().threads)]
        threads: usize,
        /// Split work by prefixes of this length instead of the fixed seeds
        #[arg(long)]
        frontier_depth: Option<usize>,
    },
    /// Print reachable costs and worst-case optima for one word
    Diagram {
        #[arg(long, value_enum, default_value_t = VariantArg::Acd)]
        variant: VariantArg,
        /// Labels, e.g. `1 2 1 2`
        #[arg(required = true, num_args = 1..)]
        word: Vec<Label>,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum VariantArg {
    Both,
    PreAcd,
    Acd,
}

impl VariantArg {
    fn variants(self) -> Vec<Variant> {
        match self {
            VariantArg::Both => Variant::ALL.to_vec(),
            VariantArg::PreAcd => vec![Variant::PreAcd],
            VariantArg::Acd => vec![Variant::Acd],
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let level = if cmd.verbose { Level::DEBUG } else { Level::INFO };
    SubscriberBuilder::default()
        .with_target(false)
        .with_max_level(level)
        .init();
    match cmd.action {
        Action::Estimate {
            start_size,
            max_size,
            variant,
            no_limit,
            out_dir,
            threads,
            frontier_depth,
        } => {
            let mut cfg = EnumCfg {
                threads,
                ..EnumCfg::default()
            };
            if let Some(depth) = frontier_depth {
                cfg.schedule = Schedule::Frontier { depth };
            }
            let (start, max) = clamp_sizes(start_size, max_size)?;
            estimate(start, max, variant, !no_limit, out_dir, cfg)
        }
        Action::Diagram { variant, word } => diagram(variant, &word),
        Action::Report => {
            println!("{}", serde_json::to_string_pretty(&provenance::stamp())?);
            Ok(())
        }
    }
}

fn clamp_sizes(start: usize, max: usize) -> Result<(usize, usize)> {
    let max = if max > MAX_CHORDS {
        tracing::warn!(requested = max, used = MAX_CHORDS, "max size too large, clamping");
        MAX_CHORDS
    } else {
        max
    };
    let start = start.max(1);
    if start > max {
        bail!("start size {start} exceeds max size {max}");
    }
    Ok((start, max))
}

fn estimate(
    start: usize,
    max: usize,
    variant: VariantArg,
    include_limit: bool,
    out_dir: PathBuf,
    cfg: EnumCfg,
) -> Result<()> {
    for v in variant.variants() {
        let mut out = ResultFile::create(result_path(&out_dir, start, max, v))?;
        let mut rows = Vec::new();
        for size in start..=max {
            let t0 = Instant::now();
            let est = compute_worst_case_estimates_with(v, size, include_limit, &cfg)?;
            let elapsed = t0.elapsed();
            let line = format_line(&est, elapsed);
            println!("{line}");
            out.append(&line)?;
            tracing::info!(
                variant = %v,
                size,
                diagrams = est.diagrams,
                finite = est.finite_ratio(),
                limit = ?est.limit_ratio(),
                elapsed = ?elapsed,
                "size done"
            );
            rows.push(Row::new(&est, elapsed));
        }
        let payload = Payload::new(json!({
            "variant": v.slug(),
            "start_size": start,
            "max_size": max,
            "include_limit": include_limit,
            "threads": cfg.threads,
            "schedule": format!("{:?}", cfg.schedule),
        }))
        .with_results(serde_json::to_value(&rows)?);
        let prov = write_sidecar(out.path(), payload)?;
        tracing::info!(out = %out.path().display(), provenance = %prov.display(), "written");
    }
    Ok(())
}

fn diagram(variant: VariantArg, word: &[Label]) -> Result<()> {
    let variant = match variant {
        VariantArg::PreAcd => Variant::PreAcd,
        VariantArg::Acd => Variant::Acd,
        VariantArg::Both => bail!("pick one variant for a single diagram"),
    };
    check_word(variant, word)?;
    match variant {
        Variant::PreAcd => print_diagram(&PreAcd::from_word(word)),
        Variant::Acd => print_diagram(&Acd::from_word(word)),
    }
}

fn check_word(variant: Variant, word: &[Label]) -> Result<()> {
    if word.len() % 2 != 0 || word.len() > 2 * MAX_CHORDS {
        bail!(
            "word needs an even number of labels, at most {}",
            2 * MAX_CHORDS
        );
    }
    for &l in word {
        if l == 0 {
            bail!("labels start at 1");
        }
        let count = word.iter().filter(|&&x| x == l).count();
        match variant {
            Variant::Acd if count != 2 => bail!("label {l} occurs {count} times, need 2"),
            Variant::PreAcd if count > 2 => bail!("label {l} occurs {count} times, at most 2"),
            _ => {}
        }
    }
    Ok(())
}

fn print_diagram<D: ChordDiagram>(d: &D) -> Result<()> {
    let target = d.len() / 2;
    println!("{} diagram: {d}", D::VARIANT);
    for regime in Regime::ALL {
        let costs = collect_reachable_costs(d, target, regime);
        let cfg = SolverCfg::default();
        let sol = solve_bound(&costs, regime, cfg)?;
        let tight = sol.tight(&costs, cfg.eps_feas);
        println!("{regime:?}: {} reachable costs (* = tight at optimum)", costs.len());
        for f in &costs {
            let mark = if tight.contains(&f) { "*" } else { " " };
            println!(" {mark}{f}");
        }
        let point: Vec<String> = sol.segments().iter().map(|x| format!("{x:.6}")).collect();
        println!(
            "  worst value {:.8} (normalised {:.8}) at x = [{}]",
            sol.value,
            regime.normalise(sol.value),
            point.join(", ")
        );
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sizes_are_clamped_and_checked() {
        assert_eq!(clamp_sizes(1, 4).unwrap(), (1, 4));
        assert_eq!(clamp_sizes(0, 99).unwrap(), (1, MAX_CHORDS));
        assert!(clamp_sizes(5, 3).is_err());
    }

    #[test]
    fn word_validation() {
        assert!(check_word(Variant::Acd, &[1, 2, 1, 2]).is_ok());
        assert!(check_word(Variant::Acd, &[1, 2]).is_err());
        assert!(check_word(Variant::PreAcd, &[1, 2]).is_ok());
        assert!(check_word(Variant::PreAcd, &[1, 1, 1, 2]).is_err());
        assert!(check_word(Variant::Acd, &[1, 1, 2]).is_err());
        assert!(check_word(Variant::Acd, &[0, 0]).is_err());
    }

    #[test]
    fn estimate_writes_results_and_sidecar() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = EnumCfg::default();
        estimate(1, 2, VariantArg::Both, true, dir.path().to_path_buf(), cfg).unwrap();
        let acd = std::fs::read_to_string(dir.path().join("estimates_1-2_acd.txt")).unwrap();
        let lines: Vec<&str> = acd.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("Number of ACD of length 1 is 1. It takes "));
        assert!(lines[1].ends_with("Worst values are 3.25000000 and 3.00000000"));
        let prov = dir.path().join("estimates_1-2_pre_acd.provenance.json");
        let parsed: serde_json::Value =
            serde_json::from_slice(&std::fs::read(prov).unwrap()).unwrap();
        assert_eq!(parsed["results"][0]["diagrams"], 2);
        assert_eq!(parsed["params"]["variant"], "pre_acd");
    }
}
