use crate::core::subject;
use crate::models::appointment::Appointment;
use crate::models::project::ProjectRegistry;
use crate::models::task_event::TaskEvent;
use log::debug;

/// Turn raw appointments into task events.
///
/// Appointments whose subject has no colon, or whose nickname is not a
/// known project, are dropped. Input order is kept and nothing is
/// deduplicated: every occurrence of a recurring meeting counts.
pub fn classify(appointments: &[Appointment], registry: &ProjectRegistry) -> Vec<TaskEvent> {
    let mut events = Vec::with_capacity(appointments.len());

    for a in appointments {
        let Some(parsed) = subject::parse(&a.subject) else {
            debug!("skip {} '{}': no project prefix", a.start_str(), a.subject);
            continue;
        };

        let Some(project) = registry.lookup(&parsed.project_nickname) else {
            debug!(
                "skip {} '{}': unknown project '{}'",
                a.start_str(),
                a.subject,
                parsed.project_nickname
            );
            continue;
        };

        events.push(TaskEvent {
            start: a.start,
            duration: a.duration,
            description: parsed.description,
            body: a.body.clone(),
            project_nickname: project.nickname.clone(),
            task_number: parsed.task_number,
            project: project.clone(),
        });
    }

    debug!(
        "classified {} of {} appointments",
        events.len(),
        appointments.len()
    );
    events
}
