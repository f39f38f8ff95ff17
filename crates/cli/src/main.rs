use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use puzzles::gen::{teque_input, TequeGenCfg};
use puzzles::{compare, Problem};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod cases;
mod provenance;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Solve and check small judge puzzles")]
struct Cmd {
    /// Optional run tag; propagated to provenance and logs
    #[arg(long, global = true)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Solve one input and print (or write) the answer
    Solve {
        /// Problem id, e.g. `teque`
        problem: Problem,
        /// Input file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Write the answer here (plus a provenance sidecar) instead of stdout
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Solve inputs and compare against their answer keys
    Check {
        /// Problem ids to check
        #[arg(required = true, num_args = 1..)]
        problems: Vec<Problem>,
        /// Directory of `<name>.in`/`<name>.ans` pairs, or of one such directory per problem id
        #[arg(long, conflicts_with_all = ["input", "answer"])]
        cases: Option<PathBuf>,
        /// Single input file (with `--answer`)
        #[arg(long, requires = "answer")]
        input: Option<PathBuf>,
        #[arg(long, requires = "input")]
        answer: Option<PathBuf>,
    },
    /// Print a seeded random teque input
    Gen {
        #[arg(long, default_value_t = 1000)]
        commands: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0.3, value_parser = parse_ratio)]
        get_ratio: f64,
    },
    /// List the known problem ids
    List,
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Solve {
            problem,
            input,
            out,
        } => solve(problem, input, out, cmd.tag),
        Action::Check {
            problems,
            cases,
            input,
            answer,
        } => match (cases, input, answer) {
            (Some(dir), _, _) => check_cases(&problems, &dir),
            (None, Some(input), Some(answer)) => match problems.as_slice() {
                [problem] => check(*problem, &input, &answer),
                _ => bail!("--input/--answer checks exactly one problem; use --cases for several"),
            },
            _ => bail!("check needs --cases <DIR> or --input <PATH> --answer <PATH>"),
        },
        Action::Gen {
            commands,
            seed,
            get_ratio,
        } => {
            let cfg = TequeGenCfg {
                commands,
                seed,
                get_ratio,
                ..TequeGenCfg::default()
            };
            print!("{}", teque_input(&cfg));
            Ok(())
        }
        Action::List => {
            for p in Problem::ALL {
                println!("{p}");
            }
            Ok(())
        }
        Action::Report => report(cmd.tag),
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
        }
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            Ok(buf)
        }
    }
}

fn solve_text(problem: Problem, text: &str) -> Result<String> {
    problem
        .solve(text)
        .with_context(|| format!("solving {problem}"))
}

fn solve(
    problem: Problem,
    input: Option<PathBuf>,
    out: Option<PathBuf>,
    tag: Option<String>,
) -> Result<()> {
    let source = input
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<stdin>".to_string());
    tracing::info!(%problem, input = %source, tag = ?tag, "solve");
    let text = read_input(input.as_deref())?;
    let answer = solve_text(problem, &text)?;
    tracing::info!(input_bytes = text.len(), answer_lines = answer.lines().count(), "solved");

    let Some(out) = out else {
        println!("{answer}");
        return Ok(());
    };
    if let Some(parent) = out.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, format!("{answer}\n"))
        .with_context(|| format!("writing {}", out.display()))?;
    let params = json!({ "problem": problem.id(), "input": source });
    let sidecar = provenance::write_sidecar(&out, tag, params)?;
    tracing::info!(out = %out.display(), sidecar = %sidecar.display(), "wrote answer");
    Ok(())
}

fn check(problem: Problem, input: &Path, answer: &Path) -> Result<()> {
    tracing::info!(%problem, input = %input.display(), answer = %answer.display(), "check");
    let text = read_input(Some(input))?;
    let key = std::fs::read_to_string(answer)
        .with_context(|| format!("reading {}", answer.display()))?;
    let produced = solve_text(problem, &text)?;
    let result = compare(&produced, &key);
    println!("{result}");
    if !result.is_success() {
        bail!(
            "{problem}: {} of {} lines differ",
            result.mismatches.len(),
            result.lines_checked
        );
    }
    Ok(())
}

fn check_cases(problems: &[Problem], dir: &Path) -> Result<()> {
    let mut total = 0;
    let mut failed = 0;
    for &problem in problems {
        let case_dir = cases::problem_dir(dir, problem);
        let found = cases::discover(&case_dir)?;
        tracing::info!(%problem, dir = %case_dir.display(), cases = found.len(), "check cases");
        if found.is_empty() {
            println!("{problem}: no cases in {}", case_dir.display());
            total += 1;
            failed += 1;
            continue;
        }
        let mut passed = 0;
        for case in &found {
            let run = cases::run_case(problem, case)?;
            println!("{run}");
            if run.passed() {
                passed += 1;
            }
        }
        println!("{problem}: {passed}/{} passed", found.len());
        total += found.len();
        failed += found.len() - passed;
    }
    if failed > 0 {
        bail!("{failed} of {total} cases failed");
    }
    Ok(())
}

fn parse_ratio(s: &str) -> Result<f64, String> {
    let p: f64 = s.parse().map_err(|e| format!("{e}"))?;
    if (0.0..=1.0).contains(&p) {
        Ok(p)
    } else {
        Err(format!("{s} is not a probability in [0, 1]"))
    }
}

fn report(tag: Option<String>) -> Result<()> {
    let doc = provenance::Provenance::new(tag, json!({}), Vec::new());
    println!("{}", serde_json::to_string_pretty(&doc)?);
    Ok(())
}
