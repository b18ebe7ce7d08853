use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use clap::{Parser, Subcommand};
use libconjugate::{ConjugateConfig, Generator};
use libdeinflect::{DeinflectConfig, Deinflector};
use libkatsuyou_core::{Lexicon, RuleTable, WordClass};

#[derive(Parser)]
#[command(name = "katsuyou", about = "Japanese deinflection and conjugation")]
struct Args {
    /// JSON lexicon (array of {lexeme, class, commonness, reading, gloss})
    #[arg(long, global = true)]
    lexicon: Option<PathBuf>,

    /// Use the small built-in lexicon
    #[arg(long, global = true)]
    demo: bool,

    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Recover dictionary forms of inflected words
    Deinflect {
        #[arg(required = true)]
        words: Vec<String>,
    },
    /// Print the conjugation table of a dictionary form
    Conjugate {
        base: String,
        /// Class tag (v1, v5k, vs-i, adj-i, ...); looked up when omitted
        #[arg(long)]
        class: Option<String>,
        #[arg(long, default_value = "")]
        reading: String,
        #[arg(long, default_value = "")]
        gloss: String,
    },
    /// Validate the rule table; with a lexicon, round-trip every entry's forms
    Check,
    /// List rules, optionally for one reason or one surface
    Rules {
        #[arg(long)]
        reason: Option<String>,
        #[arg(long)]
        word: Option<String>,
    },
    /// Write the built-in lexicon as JSON
    ExportDemo {
        #[arg(long, default_value = "lexicon.json")]
        out: PathBuf,
    },
}

fn load_lexicon(args: &Args) -> Result<Option<Arc<Lexicon>>> {
    if let Some(path) = &args.lexicon {
        let lexicon = Lexicon::load_json(path)
            .map_err(|e| anyhow!("failed to load lexicon {}: {}", path.display(), e))?;
        log::info!("loaded {} lexemes from {}", lexicon.len(), path.display());
        return Ok(Some(Arc::new(lexicon)));
    }
    Ok(args.demo.then(|| Arc::new(Lexicon::load_demo())))
}

fn deinflect(args: &Args, words: &[String]) -> Result<()> {
    let config = match &args.config {
        Some(path) => DeinflectConfig::load_toml(path)
            .map_err(|e| anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => DeinflectConfig::default(),
    };
    let lexicon = load_lexicon(args)?;
    let mut deinflector = Deinflector::new(RuleTable::shared(), config);
    if let Some(lexicon) = &lexicon {
        deinflector = deinflector.with_lexicon(Arc::clone(lexicon));
    }

    for word in words {
        let candidates = deinflector.deinflect(word);
        if args.json {
            println!("{}", serde_json::to_string_pretty(&candidates)?);
            continue;
        }
        println!("{}", word);
        if candidates.is_empty() {
            println!("  (no match)");
        }
        for (i, c) in candidates.iter().enumerate() {
            let chain = if c.is_identity() {
                "dictionary form".to_string()
            } else {
                c.reasons().join(" > ")
            };
            let gloss = lexicon
                .as_ref()
                .and_then(|lx| lx.lookup_entries(&c.base_form).into_iter().find(|e| e.class == c.class))
                .and_then(|e| e.gloss)
                .map(|g| format!("  \"{}\"", c.describe(&g)))
                .unwrap_or_default();
            println!(
                "  {}. {} [{}] {} ({:.2}){}{}",
                i + 1,
                c.base_form,
                c.class,
                chain,
                c.confidence,
                if c.irregular { " irregular" } else { "" },
                gloss
            );
        }
    }
    Ok(())
}

fn conjugate(args: &Args, base: &str, class: Option<&str>, reading: &str, gloss: &str) -> Result<()> {
    let config = match &args.config {
        Some(path) => ConjugateConfig::load_toml(path)
            .map_err(|e| anyhow!("failed to load config {}: {}", path.display(), e))?,
        None => ConjugateConfig::default(),
    };
    let entry = load_lexicon(args)?.and_then(|lx| lx.lookup_entries(base).into_iter().next());

    let class: WordClass = match (class, &entry) {
        (Some(tag), _) => tag.parse().map_err(anyhow::Error::msg)?,
        (None, Some(e)) => e.class,
        (None, None) => bail!("no class for {}: pass --class or a lexicon listing it", base),
    };
    let reading = match (reading, &entry) {
        ("", Some(e)) => e.reading.clone().unwrap_or_default(),
        (r, _) => r.to_string(),
    };
    let gloss = match (gloss, &entry) {
        ("", Some(e)) => e.gloss.clone().unwrap_or_default(),
        (g, _) => g.to_string(),
    };

    let groups = Generator::new(config).generate(base, class, &reading, &gloss);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
        return Ok(());
    }
    println!("{} [{}]", base, class);
    for group in &groups {
        println!("{}", group.title);
        for item in &group.items {
            let reading = item.reading.as_deref().map(|r| format!(" ({})", r)).unwrap_or_default();
            println!("  {:<28} {}{}  {}", item.form_label, item.surface, reading, item.gloss);
        }
    }
    Ok(())
}

fn check(args: &Args) -> Result<()> {
    let table = RuleTable::build().context("rule table failed to build")?;
    table.validate().context("rule table failed validation")?;
    let lexical = table.rules().iter().filter(|r| r.irregular).count();
    println!("{} rules ({} lexical), all reversible", table.len(), lexical);

    let Some(lexicon) = load_lexicon(args)? else {
        return Ok(());
    };
    let mut config = DeinflectConfig::default();
    config.base.max_candidates = usize::MAX;
    let deinflector = Deinflector::new(Arc::new(table), config).with_lexicon(Arc::clone(&lexicon));
    let generator = Generator::default();

    let mut forms = 0;
    let mut failures = 0;
    for entry in lexicon.entries() {
        for group in generator.generate(&entry.lexeme, entry.class, "", "") {
            for item in &group.items {
                forms += 1;
                let back = deinflector.deinflect(&item.surface).iter().any(|c| {
                    c.base_form == entry.lexeme && c.class == entry.class && c.reason_chain == item.reasons
                });
                if !back {
                    failures += 1;
                    println!("  {} [{}] {}: {} does not deinflect back", entry.lexeme, entry.class, item.form_label, item.surface);
                }
            }
        }
    }
    println!("{} lexemes, {} forms, {} round-trip failures", lexicon.len(), forms, failures);
    if failures > 0 {
        bail!("{} forms failed the round trip", failures);
    }
    Ok(())
}

fn rules(args: &Args, reason: Option<&str>, word: Option<&str>) -> Result<()> {
    let table = RuleTable::shared();
    let selected: Vec<_> = match (reason, word) {
        (Some(label), _) => {
            if label.parse::<libkatsuyou_core::Reason>().is_err() {
                bail!("unknown reason: {}", label);
            }
            table.rules_for_reason(label)
        }
        (None, Some(w)) => table.rules_for_word(w).collect(),
        (None, None) => table.rules().iter().collect(),
    };
    let selected: Vec<_> = match (reason, word) {
        (Some(_), Some(w)) => selected.into_iter().filter(|r| w.ends_with(r.surface.as_str())).collect(),
        _ => selected,
    };
    if args.json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }
    for r in selected {
        println!(
            "{:>12} -> {:<6} {:<22} {:?} -> {:?}{}",
            r.surface,
            r.base,
            r.reason,
            r.source,
            r.target,
            match (r.irregular, r.lookup_only) {
                (true, _) => " lexical",
                (false, true) => " needs-lookup",
                _ => "",
            }
        );
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    match &args.command {
        Command::Deinflect { words } => deinflect(&args, words),
        Command::Conjugate { base, class, reading, gloss } => {
            conjugate(&args, base, class.as_deref(), reading, gloss)
        }
        Command::Check => check(&args),
        Command::Rules { reason, word } => rules(&args, reason.as_deref(), word.as_deref()),
        Command::ExportDemo { out } => {
            Lexicon::load_demo()
                .save_json(out)
                .map_err(|e| anyhow!("failed to write {}: {}", out.display(), e))?;
            println!("Wrote demo lexicon to {}", out.display());
            Ok(())
        }
    }
}
