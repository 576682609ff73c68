use crate::infra::{default_scoring_config, InMemoryProgramCatalog, InMemoryStudentDirectory};
use chrono::Local;
use clap::Args;
use std::path::PathBuf;
use std::sync::Arc;

use orientcam::error::AppError;
use orientcam::orientation::catalog::{CatalogStatistics, ProgramCatalogImporter};
use orientcam::orientation::matching::{
    FinancialSituation, ProgramCatalogRepository, RecommendationService, RiasecResult, StudentId,
    StudentProfile, StudentRecord, StudentRepository, ValueRatings,
};
use orientcam::orientation::riasec::quiz::{score_answers, QuizAnswer, QuizKey, QUESTION_COUNT};
use orientcam::orientation::riasec::HollandCode;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Maximum number of recommendations to display
    #[arg(long)]
    pub(crate) limit: Option<usize>,
    /// Optional catalog CSV export to score instead of the built-in programs
    #[arg(long)]
    pub(crate) catalog_csv: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogStatsArgs {
    /// Path to a catalog CSV export
    #[arg(long)]
    pub(crate) csv: PathBuf,
}

pub(crate) fn run_catalog_stats(args: CatalogStatsArgs) -> Result<(), AppError> {
    let programs = ProgramCatalogImporter::from_path(&args.csv)?;
    let stats = CatalogStatistics::collect(&programs);

    println!("Catalog statistics ({})", args.csv.display());
    println!("Active programs: {}", stats.total_programs);

    println!("\nBy level");
    for (level, count) in &stats.by_level {
        println!("- {}: {}", level, count);
    }

    println!("\nBy department");
    for (department, count) in &stats.by_department {
        println!("- {}: {}", department, count);
    }

    println!("\nRIASEC primary letters");
    for (letter, count) in &stats.riasec_distribution {
        println!("- {}: {}", letter, count);
    }

    println!("\nAverage annual tuition: {:.0} FCFA", stats.average_tuition);
    println!(
        "Average reported employment rate: {:.1}%",
        stats.average_employment_rate
    );

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    println!("OrientCam recommendation demo");

    let students = Arc::new(InMemoryStudentDirectory::default());
    let catalog = match args.catalog_csv {
        Some(path) => {
            let programs = ProgramCatalogImporter::from_path(path)?;
            let catalog = InMemoryProgramCatalog::default();
            if let Err(err) = catalog.replace_all(programs) {
                println!("  Catalog unavailable: {}", err);
                return Ok(());
            }
            Arc::new(catalog)
        }
        None => Arc::new(InMemoryProgramCatalog::seeded()),
    };

    let service = RecommendationService::new(
        students.clone(),
        catalog.clone(),
        default_scoring_config(),
    );

    let student_id = StudentId("stu-demo".to_string());
    if let Err(err) = students.upsert(demo_student(&student_id)) {
        println!("  Student directory unavailable: {}", err);
        return Ok(());
    }

    let today = Local::now().date_naive();
    let scores = match score_answers(&demo_quiz_answers(), &QuizKey::standard()) {
        Ok(scores) => scores,
        Err(err) => {
            println!("  Quiz submission rejected: {}", err);
            return Ok(());
        }
    };
    let holland_code = HollandCode::from_scores(&scores);
    if let Err(err) = students.record_riasec(
        &student_id,
        RiasecResult {
            scores,
            holland_code,
            recorded_on: today,
            test_version: "1.0".to_string(),
        },
    ) {
        println!("  RIASEC result could not be stored: {}", err);
        return Ok(());
    }

    println!("\nStudent profile");
    println!("- Code Holland: {}", holland_code);
    for (dimension, value) in scores.entries() {
        println!("  - {} ({}): {}%", dimension.label(), dimension.code(), value);
    }

    let entries = match service.generate(&student_id, args.limit, today) {
        Ok(entries) => entries,
        Err(err) => {
            println!("  Recommendation generation failed: {}", err);
            return Ok(());
        }
    };

    println!("\nRecommendations ({} programmes)", entries.len());
    for entry in &entries {
        let tier = entry.score.tier();
        println!(
            "#{} {} {} — {}% ({})",
            entry.ranking,
            tier.icon(),
            entry.program.name,
            entry.score.total_score,
            tier.label()
        );
        for strength in &entry.score.strengths {
            println!("    + {}", strength);
        }
        for weakness in &entry.score.weaknesses {
            println!("    - {}", weakness);
        }
    }

    Ok(())
}

fn demo_student(student_id: &StudentId) -> StudentRecord {
    StudentRecord {
        student_id: student_id.clone(),
        profile: StudentProfile {
            riasec: None,
            bac_grade: Some(15),
            values: Some(ValueRatings {
                autonomy: 5,
                creativity: 4,
                helping_others: 3,
                job_security: 2,
                salary: 3,
                work_life_balance: 3,
                prestige: 4,
                variety: 3,
            }),
            financial_situation: FinancialSituation::High,
            completion_percentage: 100,
        },
        riasec_result: None,
    }
}

/// Fixed submission favoring investigative questions of the standard key.
fn demo_quiz_answers() -> Vec<QuizAnswer> {
    (1..=QUESTION_COUNT as u16)
        .map(|question_number| QuizAnswer {
            question_number,
            answer: if question_number % 6 == 2 { 5 } else { 2 },
        })
        .collect()
}
