use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "kwal")]
#[command(about = "Browse and manage Kwalifai job listings from the terminal")]
pub struct Cli {
    /// API base URL (defaults to KWAL_API_BASE_URL or the local server)
    #[arg(long, global = true)]
    pub api_url: Option<String>,

    /// Bearer token for authenticated calls
    #[arg(long, global = true, env = "KWAL_API_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// Account email, required when saving a profile
    #[arg(long, global = true, env = "KWAL_USER_EMAIL")]
    pub email: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse and manage job listings
    Jobs {
        #[command(subcommand)]
        command: JobsCommand,
    },

    /// Apply to a job
    Apply {
        job_id: String,

        #[arg(long)]
        resume_url: Option<String>,

        #[arg(long)]
        cover_letter: Option<String>,
    },

    /// Your applications
    Applications {
        #[command(subcommand)]
        command: ApplicationsCommand,
    },

    /// Profiles
    Profile {
        #[command(subcommand)]
        command: ProfileCommand,
    },
}

#[derive(Debug, Subcommand)]
pub enum JobsCommand {
    /// Search open listings
    List(JobListArgs),

    /// Show one listing
    Show { id: String },

    /// Listings you posted (employers)
    Mine {
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Close one of your listings
    Close { id: String },

    /// Applications received for one of your listings
    Applicants { id: String },
}

#[derive(Debug, Args)]
pub struct JobListArgs {
    /// Free-text search
    #[arg(long)]
    pub q: Option<String>,

    #[arg(long)]
    pub location: Option<String>,

    /// full_time, part_time, contract or freelance
    #[arg(long)]
    pub job_type: Option<String>,

    /// remote, hybrid or onsite
    #[arg(long)]
    pub work_mode: Option<String>,

    /// entry, mid, senior or lead
    #[arg(long)]
    pub experience_level: Option<String>,

    #[arg(long)]
    pub min_salary: Option<String>,

    #[arg(long)]
    pub max_salary: Option<String>,

    #[arg(long, default_value = "1")]
    pub page: u32,

    #[arg(long)]
    pub limit: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum ApplicationsCommand {
    /// List your applications
    List {
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Withdraw an application
    Withdraw { id: String },
}

#[derive(Debug, Subcommand)]
pub enum ProfileCommand {
    /// Show your profile, or another user's public profile
    Show {
        #[arg(long)]
        user: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_job_list_filters() {
        let cli = Cli::try_parse_from([
            "kwal", "jobs", "list", "--q", "rust", "--job-type", "contract", "--page", "2",
        ])
        .unwrap();
        match cli.command {
            Command::Jobs {
                command: JobsCommand::List(args),
            } => {
                assert_eq!(args.q.as_deref(), Some("rust"));
                assert_eq!(args.job_type.as_deref(), Some("contract"));
                assert_eq!(args.page, 2);
                assert_eq!(args.limit, None);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_parse_apply() {
        let cli = Cli::try_parse_from([
            "kwal",
            "apply",
            "12",
            "--resume-url",
            "https://cv.example.com/me.pdf",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Command::Apply { ref job_id, resume_url: Some(_), cover_letter: None } if job_id == "12"
        ));
    }
}
