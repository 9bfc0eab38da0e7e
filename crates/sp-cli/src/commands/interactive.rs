//! Interactive prompts for hours, subjects and difficulties.
//!
//! Every prompt repeats until it gets a usable answer. Running out of input
//! is an error rather than an endless loop.

use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use sp_core::{Difficulty, Subject, SubjectName};

use super::render::RenderOptions;
use super::util::parse_hours;

/// Answers gathered from the prompts.
#[derive(Debug, Clone, PartialEq)]
pub struct Answers {
    pub hours: f64,
    pub subjects: Vec<Subject>,
}

/// Reads one trimmed line, failing on end of input.
fn read_answer<R: BufRead>(reader: &mut R, what: &str) -> Result<String> {
    let mut line = String::new();
    let read = reader
        .read_line(&mut line)
        .with_context(|| format!("failed to read {what}"))?;
    if read == 0 {
        bail!("input ended while waiting for {what}");
    }
    Ok(line.trim().to_string())
}

fn prompt<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    question: &str,
    what: &str,
) -> Result<String> {
    write!(writer, "{question}")?;
    writer.flush()?;
    read_answer(reader, what)
}

fn ask_hours<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<f64> {
    loop {
        let answer = prompt(
            reader,
            writer,
            "📚 How many hours do you have available for study today? (e.g., 4.5 or 4,5): ",
            "study hours",
        )?;
        match parse_hours(&answer) {
            Ok(hours) => return Ok(hours),
            Err(err) => writeln!(
                writer,
                "🚫 Invalid input. Please enter a positive number of hours. {err}"
            )?,
        }
    }
}

fn ask_difficulty<R: BufRead, W: Write>(
    reader: &mut R,
    writer: &mut W,
    name: &SubjectName,
) -> Result<Difficulty> {
    loop {
        let answer = prompt(
            reader,
            writer,
            &format!("💡 What is the difficulty for '{name}'? (easy, medium, hard): "),
            "a difficulty",
        )?;
        match answer.parse() {
            Ok(difficulty) => return Ok(difficulty),
            Err(_) => writeln!(
                writer,
                "❌ Invalid difficulty. Please choose from 'easy', 'medium', 'hard'."
            )?,
        }
    }
}

fn ask_subjects<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Vec<Subject>> {
    writeln!(writer)?;
    writeln!(
        writer,
        "📝 Now, tell me about the subjects you want to study and their difficulty levels."
    )?;
    writeln!(writer, "Type 'done' when you have finished adding all subjects.")?;

    let mut subjects: Vec<Subject> = Vec::new();
    loop {
        let answer = prompt(
            reader,
            writer,
            "📖 Enter subject name (or 'done' to finish): ",
            "a subject name",
        )?;

        if answer.eq_ignore_ascii_case("done") {
            if subjects.is_empty() {
                writeln!(writer, "⚠️ You must add at least one subject to start planning!")?;
                continue;
            }
            return Ok(subjects);
        }

        let name = match SubjectName::new(answer) {
            Ok(name) => name,
            Err(err) => {
                writeln!(writer, "❌ {err}.")?;
                continue;
            }
        };
        let difficulty = ask_difficulty(reader, writer, &name)?;
        writeln!(
            writer,
            "✅ Successfully added '{name}' with '{difficulty}' difficulty."
        )?;

        // Naming a subject again replaces its difficulty in place.
        if let Some(existing) = subjects.iter_mut().find(|s| s.name == name) {
            existing.difficulty = difficulty;
        } else {
            subjects.push(Subject::new(name, difficulty));
        }
    }
}

/// Asks for hours and subjects.
pub fn collect_answers<R: BufRead, W: Write>(reader: &mut R, writer: &mut W) -> Result<Answers> {
    writeln!(writer, "🌟 Welcome to your Smart Study Planner! 🌟")?;
    writeln!(
        writer,
        "Let's organize your time to achieve your goals brilliantly! ✨"
    )?;

    let hours = ask_hours(reader, writer)?;
    let subjects = ask_subjects(reader, writer)?;
    tracing::debug!(hours, subjects = subjects.len(), "collected answers");

    Ok(Answers { hours, subjects })
}

/// Prompts for input, then prints the plan.
///
/// With `json`, prompts go to `prompts` and only the JSON goes to `output`.
pub fn run<R: BufRead, P: Write, W: Write>(
    reader: &mut R,
    prompts: &mut P,
    output: &mut W,
    options: RenderOptions,
    json: bool,
) -> Result<()> {
    let answers = collect_answers(reader, prompts)?;
    writeln!(prompts)?;
    super::plan::run(output, answers.hours, &answers.subjects, options, json)
}
