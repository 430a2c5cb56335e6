//! Plain-text rendering of view models.

use std::fmt::Write;

use kwal_models::{FieldErrors, Pager, User};
use kwal_views::cards::{ApplicantRow, ApplicationRow, JobCard, JobDetail, ProfileCard};
use kwal_views::pages::{ApplicantsView, ApplicationsView, EmployerJobsView, JobBoardView};

pub fn job_board(view: &JobBoardView) -> String {
    let mut out = String::new();
    if let Some(message) = view.empty_message {
        out.push_str(message);
        out.push('\n');
        return out;
    }
    let _ = writeln!(out, "{} job(s)", view.total);
    for card in &view.cards {
        out.push_str(&job_card(card));
    }
    push_pager(&mut out, view.pager);
    out
}

pub fn employer_jobs(view: &EmployerJobsView) -> String {
    let mut out = String::new();
    if let Some(message) = view.empty_message {
        out.push_str(message);
        out.push('\n');
        return out;
    }
    for card in &view.cards {
        out.push_str(&job_card(card));
    }
    push_pager(&mut out, view.pager);
    out
}

pub fn job_card(card: &JobCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}] {} - {}", card.id, card.title, card.company);

    let mut facts: Vec<String> = Vec::new();
    if let Some(location) = &card.location {
        facts.push(location.clone());
    }
    if let Some(job_type) = card.job_type {
        facts.push(job_type.to_string());
    }
    if let Some(salary) = &card.salary {
        facts.push(salary.clone());
    }
    facts.push(card.status.to_string());
    if let Some(posted) = &card.posted {
        facts.push(format!("posted {}", posted));
    }
    let _ = writeln!(out, "    {}", facts.join(" | "));
    if !card.tech_stack.is_empty() {
        let _ = writeln!(out, "    {}", card.tech_stack.join(", "));
    }
    out
}

pub fn job_detail(job: &JobDetail) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", job.title);
    let _ = writeln!(out, "{}", job.company);
    let _ = writeln!(out);

    let rows = [
        ("Location", job.location.clone()),
        ("Type", job.job_type.map(str::to_string)),
        ("Work mode", job.work_mode.map(str::to_string)),
        ("Experience", job.experience_level.map(str::to_string)),
        ("Salary", Some(job.salary.clone())),
        ("Status", Some(job.status.to_string())),
        ("Posted", job.posted.clone()),
        ("Deadline", job.deadline.clone()),
        ("Apply at", job.apply_url.clone()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            let _ = writeln!(out, "{:<12}{}", format!("{}:", label), value);
        }
    }

    push_section(&mut out, "Description", &job.description);
    push_section(&mut out, "Requirements", &job.requirements);
    if !job.tech_stack.is_empty() {
        push_section(&mut out, "Tech stack", &job.tech_stack.join(", "));
    }
    if !job.benefits.is_empty() {
        push_section(&mut out, "Benefits", &job.benefits.join(", "));
    }
    out
}

pub fn applications(view: &ApplicationsView) -> String {
    let mut out = String::new();
    if let Some(message) = view.empty_message {
        out.push_str(message);
        out.push('\n');
        return out;
    }
    for row in &view.rows {
        out.push_str(&application_row(row));
    }
    push_pager(&mut out, view.pager);
    out
}

fn application_row(row: &ApplicationRow) -> String {
    let submitted = row.submitted.as_deref().unwrap_or("-");
    format!("[{}] {} | {} | {}\n", row.id, row.title, row.status, submitted)
}

pub fn applicants(view: &ApplicantsView) -> String {
    let mut out = String::new();
    if let Some(message) = view.empty_message {
        out.push_str(message);
        out.push('\n');
        return out;
    }
    for row in &view.rows {
        out.push_str(&applicant_row(row));
    }
    out
}

fn applicant_row(row: &ApplicantRow) -> String {
    let mut out = format!(
        "[{}] {} | {} | {}\n",
        row.id,
        row.applicant,
        row.status,
        row.submitted.as_deref().unwrap_or("-")
    );
    if let Some(resume) = &row.resume_url {
        let _ = writeln!(out, "    Resume: {}", resume);
    }
    out
}

pub fn profile_card(card: &ProfileCard) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", card.name);
    for line in [&card.headline, &card.position, &card.location].into_iter().flatten() {
        let _ = writeln!(out, "{}", line);
    }
    if card.open_to_work {
        let _ = writeln!(out, "Open to work");
    }
    if let Some(completion) = card.completion {
        let _ = writeln!(out, "Profile {}% complete", completion);
    }
    if let Some(summary) = &card.summary {
        push_section(&mut out, "About", summary);
    }
    if !card.languages.is_empty() {
        push_section(&mut out, "Languages", &card.languages.join(", "));
    }
    if !card.links.is_empty() {
        let _ = writeln!(out, "\nLinks");
        for (label, url) in &card.links {
            let _ = writeln!(out, "  {}: {}", label, url);
        }
    }
    out
}

/// The signed-in account.
pub fn account(user: &User) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Account #{}", user.id);
    if let Some(email) = &user.email {
        let _ = writeln!(out, "Email: {}", email);
    }
    if let Some(user_type) = user.user_type {
        let _ = writeln!(out, "Type: {}", user_type);
    }
    match &user.profile {
        Some(profile) => {
            out.push('\n');
            out.push_str(&profile_card(&ProfileCard::new(user, profile)));
        }
        None => {
            let _ = writeln!(out, "No profile yet.");
        }
    }
    out
}

pub fn field_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        let _ = writeln!(out, "  {}: {}", field, message);
    }
    out
}

fn push_pager(out: &mut String, pager: Option<Pager>) {
    if let Some(pager) = pager {
        let _ = writeln!(out, "{}", pager.label());
    }
}

fn push_section(out: &mut String, title: &str, body: &str) {
    if body.trim().is_empty() {
        return;
    }
    let _ = writeln!(out, "\n{}\n{}", title, body.trim());
}
