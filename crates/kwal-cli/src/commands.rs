//! Subcommand handlers. Each one drives the matching page controller.

use anyhow::{anyhow, bail, Result};
use tracing::info;

use kwal_models::{
    ApplicationId, ApplyForm, JobFilterField, JobFilters, JobId, UserId, JOB_BOARD_PAGE_SIZE,
};
use kwal_views::pages::{
    EmployerJobsPage, JobApplicantsPage, JobBoardPage, JobDetailPage, MyApplicationsPage,
    ProfilePage, PublicProfile, PublicProfilePage,
};
use kwal_views::{AppContext, GateState, RecordingNavigator};

use crate::cli::{ApplicationsCommand, Command, JobListArgs, JobsCommand, ProfileCommand};
use crate::render;

pub async fn run(ctx: &AppContext, navigator: &RecordingNavigator, command: Command) -> Result<()> {
    match command {
        Command::Jobs { command } => jobs(ctx, navigator, command).await,
        Command::Apply {
            job_id,
            resume_url,
            cover_letter,
        } => apply(ctx, navigator, job_id, resume_url, cover_letter).await,
        Command::Applications { command } => applications(ctx, command).await,
        Command::Profile { command } => profile(ctx, command).await,
    }
}

async fn jobs(ctx: &AppContext, navigator: &RecordingNavigator, command: JobsCommand) -> Result<()> {
    match command {
        JobsCommand::List(args) => {
            let page = JobBoardPage::with_filters(ctx, job_filters(&args)?);
            page.load().await;
            let view = page.view();
            if let Some(error) = view.error {
                bail!(error);
            }
            print!("{}", render::job_board(&view));
        }
        JobsCommand::Show { id } => {
            let page = JobDetailPage::new(ctx, JobId::from_string(id));
            page.load().await;
            let view = page.view();
            if let Some(error) = view.error {
                bail!(error);
            }
            let job = view.job.ok_or_else(|| anyhow!("Job not found"))?;
            print!("{}", render::job_detail(&job));
        }
        JobsCommand::Mine { page: page_number } => {
            let mut page = EmployerJobsPage::new(ctx);
            require_employer(page.open().await, navigator)?;
            if page_number > 1 {
                page.go_to_page(page_number).await?;
            }
            let view = page
                .view()
                .children()
                .ok_or_else(|| anyhow!("Employer access required"))?;
            if let Some(error) = view.error {
                bail!(error);
            }
            print!("{}", render::employer_jobs(&view));
        }
        JobsCommand::Close { id } => {
            let page = EmployerJobsPage::new(ctx);
            require_employer(page.open().await, navigator)?;
            let id = JobId::from_string(id);
            page.close_job(&id).await?;
            info!(job_id = %id, "Closed job");
            println!("Closed job {}", id);
        }
        JobsCommand::Applicants { id } => {
            let page = JobApplicantsPage::new(ctx, JobId::from_string(id));
            require_employer(page.open().await, navigator)?;
            let view = page
                .view()
                .children()
                .ok_or_else(|| anyhow!("Employer access required"))?;
            if let Some(error) = view.error {
                bail!(error);
            }
            print!("{}", render::applicants(&view));
        }
    }
    Ok(())
}

async fn apply(
    ctx: &AppContext,
    navigator: &RecordingNavigator,
    job_id: String,
    resume_url: Option<String>,
    cover_letter: Option<String>,
) -> Result<()> {
    let mut page = JobDetailPage::new(ctx, JobId::from_string(job_id));
    let form = ApplyForm {
        resume_url: resume_url.unwrap_or_default(),
        cover_letter: cover_letter.unwrap_or_default(),
    };

    match page.apply(&form).await {
        Ok(application) => {
            if let Some(application) = application {
                info!(application_id = %application.id, "Application submitted");
            }
            if let Some(notice) = page.view().notice {
                println!("{}", notice);
            }
            Ok(())
        }
        Err(e) => {
            if let Some(route) = navigator.current() {
                eprintln!("Sign in required ({})", route);
            }
            Err(e.into())
        }
    }
}

async fn applications(ctx: &AppContext, command: ApplicationsCommand) -> Result<()> {
    match command {
        ApplicationsCommand::List { page: page_number } => {
            let mut page = MyApplicationsPage::new(ctx);
            page.load().await;
            if page_number > 1 {
                page.go_to_page(page_number).await;
            }
            let view = page.view();
            if let Some(error) = view.error {
                bail!(error);
            }
            print!("{}", render::applications(&view));
        }
        ApplicationsCommand::Withdraw { id } => {
            let page = MyApplicationsPage::new(ctx);
            let id = ApplicationId::from_string(id);
            page.withdraw(&id).await?;
            println!("Withdrew application {}", id);
        }
    }
    Ok(())
}

async fn profile(ctx: &AppContext, command: ProfileCommand) -> Result<()> {
    let ProfileCommand::Show { user } = command;
    match user {
        Some(id) => {
            let page = PublicProfilePage::new(ctx, UserId::from_string(id));
            page.load().await;
            match page.view() {
                PublicProfile::Loaded(card) => print!("{}", render::profile_card(&card)),
                other => bail!(other.message().unwrap_or("Profile not available")),
            }
        }
        None => {
            let mut page = ProfilePage::new(ctx);
            page.load().await;
            let view = page.view();
            if let Some(error) = view.error {
                bail!(error);
            }
            let user = view
                .user
                .ok_or_else(|| anyhow!("No account found. Finish onboarding first."))?;
            print!("{}", render::account(&user));
        }
    }
    Ok(())
}

fn job_filters(args: &JobListArgs) -> Result<JobFilters> {
    let mut filters = JobFilters::with_limit(args.limit.unwrap_or(JOB_BOARD_PAGE_SIZE).max(1));
    let fields = [
        (JobFilterField::Query, &args.q),
        (JobFilterField::Location, &args.location),
        (JobFilterField::JobType, &args.job_type),
        (JobFilterField::WorkMode, &args.work_mode),
        (JobFilterField::ExperienceLevel, &args.experience_level),
        (JobFilterField::MinSalary, &args.min_salary),
        (JobFilterField::MaxSalary, &args.max_salary),
    ];
    for (field, value) in fields {
        if let Some(value) = value {
            filters.set(field, value)?;
        }
    }
    Ok(filters.with_page(args.page))
}

fn require_employer(state: GateState, navigator: &RecordingNavigator) -> Result<()> {
    match state {
        GateState::Allowed => Ok(()),
        GateState::Checking => Err(anyhow!(
            "Sign in required ({})",
            navigator.current().unwrap_or_default()
        )),
        GateState::Denied => bail!("Employer access required"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kwal_models::JobType;

    fn args() -> JobListArgs {
        JobListArgs {
            q: None,
            location: None,
            job_type: None,
            work_mode: None,
            experience_level: None,
            min_salary: None,
            max_salary: None,
            page: 1,
            limit: None,
        }
    }

    #[test]
    fn test_job_filters_from_args() {
        let filters = job_filters(&JobListArgs {
            q: Some("rust".to_string()),
            job_type: Some("contract".to_string()),
            page: 3,
            ..args()
        })
        .unwrap();
        assert_eq!(filters.q, "rust");
        assert_eq!(filters.job_type, Some(JobType::Contract));
        assert_eq!(filters.page, 3);
        assert_eq!(filters.limit, JOB_BOARD_PAGE_SIZE);
    }

    #[test]
    fn test_job_filters_reject_bad_values() {
        let result = job_filters(&JobListArgs {
            min_salary: Some("lots".to_string()),
            ..args()
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_require_employer() {
        let nav = RecordingNavigator::new();
        assert!(require_employer(GateState::Allowed, &nav).is_ok());
        assert!(require_employer(GateState::Denied, &nav).is_err());
    }
}
