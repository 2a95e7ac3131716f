//! The fixed roster of team member personas
//!
//! Insertion order is the roster order: supervisor first, then the
//! specialists. Names are unique and act as the primary key.

use crate::member::TeamMember;
use std::collections::HashMap;

/// Name of the distinguished supervisor, always first in the roster and
/// always eligible for selection.
pub const SUPERVISOR: &str = "Sarah Mitchell";

/// The bank IT department: 1 supervisor + 20 specialists.
const TEAM: &[(&str, &str, &str, &str)] = &[
    (
        SUPERVISOR,
        "IT Supervisor",
        "Strategic, patient, decisive leader who focuses on big picture and resource allocation",
        "Team management, strategic planning, budget oversight, cross-departmental coordination",
    ),
    (
        "Alex Chen",
        "Senior Systems Administrator",
        "Detail-oriented perfectionist who loves solving complex problems",
        "Linux/Windows servers, network infrastructure, automation scripting",
    ),
    (
        "Maria Rodriguez",
        "Database Administrator",
        "Analytical thinker who speaks in data and metrics",
        "SQL Server, Oracle, PostgreSQL, data optimization, backup strategies",
    ),
    (
        "James Wilson",
        "Network Security Specialist",
        "Paranoid but thorough, always thinks about security implications",
        "Firewall management, penetration testing, security protocols, threat analysis",
    ),
    (
        "Emily Davis",
        "Full Stack Developer",
        "Creative problem solver who thinks in code",
        "Python, JavaScript, API development, web applications",
    ),
    (
        "Michael Brown",
        "DevOps Engineer",
        "Efficiency-focused automation enthusiast",
        "CI/CD pipelines, Docker, Kubernetes, cloud infrastructure",
    ),
    (
        "Lisa Zhang",
        "Business Analyst",
        "Bridge between technical and business, asks lots of questions",
        "Process analysis, requirements gathering, documentation, stakeholder management",
    ),
    (
        "David Johnson",
        "Cloud Architect",
        "Forward-thinking strategist obsessed with scalability",
        "AWS, Azure, cloud migration, architecture design",
    ),
    (
        "Rachel Green",
        "QA Tester",
        "Skeptical by nature, finds problems others miss",
        "Test automation, bug tracking, quality assurance, user acceptance testing",
    ),
    (
        "Kevin Lee",
        "Mobile App Developer",
        "User experience focused, thinks mobile-first",
        "iOS, Android, React Native, mobile UX/UI",
    ),
    (
        "Sophie Anderson",
        "Data Scientist",
        "Pattern recognition expert who loves insights",
        "Machine learning, data analysis, Python, R, statistical modeling",
    ),
    (
        "Tom Miller",
        "Help Desk Manager",
        "People-person who understands user pain points",
        "User support, ticket management, training, customer service",
    ),
    (
        "Nina Patel",
        "IT Compliance Officer",
        "Risk-averse, process-oriented, regulation-focused",
        "GDPR, SOX compliance, audit preparation, policy development",
    ),
    (
        "Chris Taylor",
        "Backup & Recovery Specialist",
        "Disaster-focused pessimist who prepares for worst-case scenarios",
        "Data backup, disaster recovery, business continuity planning",
    ),
    (
        "Amanda White",
        "ERP Systems Administrator",
        "Integration specialist who sees connections everywhere",
        "SAP, Oracle ERP, system integration, workflow optimization",
    ),
    (
        "Robert Kim",
        "Cybersecurity Analyst",
        "Threat-hunting detective with forensic mindset",
        "SIEM tools, incident response, malware analysis, digital forensics",
    ),
    (
        "Jessica Liu",
        "Project Manager",
        "Timeline-obsessed organizer who keeps everyone on track",
        "Agile methodology, resource planning, stakeholder communication",
    ),
    (
        "Daniel Garcia",
        "API Developer",
        "Integration enthusiast who connects systems",
        "REST APIs, microservices, system integration, documentation",
    ),
    (
        "Lauren Scott",
        "UX/UI Designer",
        "User-centric designer who thinks about adoption",
        "User interface design, usability testing, design systems",
    ),
    (
        "Mark Thompson",
        "Infrastructure Engineer",
        "Hardware-focused problem solver",
        "Server hardware, virtualization, capacity planning, performance tuning",
    ),
    (
        "Priya Sharma",
        "Automation Specialist",
        "Efficiency expert who automates repetitive tasks",
        "RPA tools, workflow automation, process optimization, scripting",
    ),
];

/// Insertion-ordered collection of team members keyed by name.
#[derive(Debug)]
pub struct Roster {
    members: Vec<TeamMember>,
    index: HashMap<String, usize>,
}

impl Roster {
    /// Build a roster from members; the first member is the supervisor.
    ///
    /// Later members with a duplicate name are ignored so names stay
    /// unique.
    pub fn from_members(members: Vec<TeamMember>) -> Self {
        let mut unique = Vec::with_capacity(members.len());
        let mut index = HashMap::with_capacity(members.len());
        for member in members {
            if index.contains_key(member.name()) {
                continue;
            }
            index.insert(member.name().to_string(), unique.len());
            unique.push(member);
        }
        Self {
            members: unique,
            index,
        }
    }

    /// Build the fixed bank IT department roster.
    pub fn bank_it() -> Self {
        Self::from_members(
            TEAM.iter()
                .map(|(name, role, personality, expertise)| {
                    TeamMember::new(*name, *role, *personality, *expertise)
                })
                .collect(),
        )
    }

    /// Look up a member by name.
    pub fn get(&self, name: &str) -> Option<&TeamMember> {
        self.index.get(name).map(|&i| &self.members[i])
    }

    /// All members in roster order.
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    /// The supervisor (first member).
    ///
    /// # Panics
    ///
    /// Panics on an empty roster, which violates the construction contract.
    pub fn supervisor(&self) -> &TeamMember {
        &self.members[0]
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}
