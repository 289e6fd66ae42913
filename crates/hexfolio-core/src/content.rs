//! Portfolio content model.
//!
//! Content is opaque read-only data: it is loaded from the config file
//! (or taken from the defaults below) and only ever displayed.

use serde::{Deserialize, Serialize};

/// Everything shown on the page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Portfolio {
    /// Short badge above the hero title.
    pub role: String,
    /// One-line list of specialities under the title.
    pub tagline: String,
    /// Hero paragraph.
    pub summary: String,
    pub about: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub skills: Vec<SkillGroup>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub education: Vec<Education>,
    pub certifications: Vec<String>,
    pub contact: Contact,
    pub footer: String,
}

/// A headline number or title with a caption.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub value: String,
    pub caption: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillGroup {
    pub name: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub achievements: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub description: String,
    pub tech: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    pub title: String,
    pub institution: String,
    pub note: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub pitch: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub location: String,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for Portfolio {
    fn default() -> Self {
        Self {
            role: "Cybersecurity Specialist".into(),
            tagline: "SOC Analyst | VAPT | Digital Forensics".into(),
            summary: "Protecting digital assets through advanced threat detection, incident \
                      response, and vulnerability assessment. Committed to securing the future, \
                      one system at a time."
                .into(),
            about: strings(&[
                "Results-driven Cybersecurity Analyst with hands-on experience in Security \
                 Operations Center (SOC) environments, incident response, and threat analysis.",
                "Skilled in vulnerability assessment, network monitoring, and SIEM-based threat \
                 detection. Adept at analyzing security events, mitigating risks, and enhancing \
                 system defenses.",
            ]),
            highlights: vec![
                Highlight {
                    value: "GDSC".into(),
                    caption: "Secretary".into(),
                },
                Highlight {
                    value: "5+".into(),
                    caption: "Vulnerabilities Fixed".into(),
                },
            ],
            skills: vec![
                SkillGroup {
                    name: "Cybersecurity".into(),
                    items: strings(&[
                        "Threat Detection",
                        "Incident Response",
                        "VAPT",
                        "Digital Forensics",
                        "SOC Monitoring",
                        "IDS/IPS",
                        "Risk Assessment",
                        "Security Auditing",
                        "Log Analysis",
                        "Threat Intelligence",
                    ]),
                },
                SkillGroup {
                    name: "Networking".into(),
                    items: strings(&[
                        "TCP/IP",
                        "DNS",
                        "Firewall Configuration",
                        "Network Traffic Analysis",
                        "Endpoint Protection",
                        "Network Hardening",
                    ]),
                },
                SkillGroup {
                    name: "Programming".into(),
                    items: strings(&["Python", "Bash Scripting", "PowerShell", "Automation"]),
                },
                SkillGroup {
                    name: "Tools & Technologies".into(),
                    items: strings(&[
                        "Splunk",
                        "Google SecOps",
                        "Wireshark",
                        "Nessus",
                        "Nmap",
                        "Metasploit",
                        "Burp Suite",
                        "Autopsy",
                        "Hashcat",
                    ]),
                },
            ],
            experience: vec![
                Experience {
                    title: "Cybersecurity/Vulnerability Assessment Intern".into(),
                    company: "Hacktify".into(),
                    period: "07/2024 – 08/2024".into(),
                    achievements: strings(&[
                        "Identified and mitigated 5+ security vulnerabilities",
                        "Conducted penetration tests on 10+ labs",
                        "Improved organizational security posture",
                    ]),
                },
                Experience {
                    title: "Cybersecurity Analyst Intern".into(),
                    company: "Shadow Fox".into(),
                    period: "01/09/2024".into(),
                    achievements: strings(&[
                        "Hands-on with Wireshark, Metasploit, PE Explorer",
                        "Completed TryHackMe Basic Pentesting",
                        "Solved password decryption challenges",
                    ]),
                },
                Experience {
                    title: "Cyber Crime Investigation Intern".into(),
                    company: "CFSS Cyber & Forensics".into(),
                    period: "06/2024 – 07/2024".into(),
                    achievements: strings(&[
                        "Analyzed system images for cyber incidents",
                        "Recovered deleted emails and communications",
                        "Supported digital forensic investigations",
                    ]),
                },
                Experience {
                    title: "Python Training Intern".into(),
                    company: "Geeta Technical Hub".into(),
                    period: "06/2024 – 08/2024".into(),
                    achievements: strings(&[
                        "Developed automation scripts",
                        "Expertise in OOP and data analysis",
                        "NumPy, Pandas, Matplotlib mastery",
                    ]),
                },
            ],
            projects: vec![
                Project {
                    name: "IDPS with Snort 3".into(),
                    description: "Intrusion Detection & Prevention System with custom rules".into(),
                    tech: strings(&["Snort", "Linux", "Network Security"]),
                },
                Project {
                    name: "Python Network Sniffer".into(),
                    description: "TCP/UDP packet capture and analysis tool".into(),
                    tech: strings(&["Python", "Scapy", "Networking"]),
                },
                Project {
                    name: "Geo Location Finder".into(),
                    description: "IP geolocation tool for network analysis".into(),
                    tech: strings(&["Python", "API Integration"]),
                },
                Project {
                    name: "Mac Changer Automation".into(),
                    description: "Automated MAC address modification script".into(),
                    tech: strings(&["Bash", "Linux", "Security"]),
                },
                Project {
                    name: "Basic Encrypter/Decrypter".into(),
                    description: "Encryption application with user-friendly interface".into(),
                    tech: strings(&["Python", "Cryptography"]),
                },
                Project {
                    name: "Incident Analysis".into(),
                    description: "DNS issue analysis and resolution".into(),
                    tech: strings(&["Network Security", "DNS"]),
                },
            ],
            education: vec![
                Education {
                    title: "B.Tech in Computer Science".into(),
                    institution: "Geeta University, Panipat".into(),
                    note: "2023 – 2027 (Expected)".into(),
                },
                Education {
                    title: "Leadership".into(),
                    institution: "Secretary of Google Developer Student Club (GDSC)".into(),
                    note: "Leading events and initiatives for student developers".into(),
                },
            ],
            certifications: strings(&[
                "Network Basics (Cisco)",
                "Play It Safe - Manage Security Risk (Google)",
                "Digital Forensics Associate (CYINTGLOBLE)",
                "RH104: Linux Fundamentals (Red Hat)",
                "Tools of the Trade: Linux and SQL (Google)",
                "Connect And Protect: Networks (Google)",
                "Digital Forensics Fundamentals (Virtual Cyber Labs)",
            ]),
            contact: Contact {
                pitch: "Interested in collaboration or have a security challenge? Let's discuss \
                        how we can work together to secure your digital infrastructure."
                    .into(),
                email: "chhokerluv@gmail.com".into(),
                phone: "+91 9254477727".into(),
                linkedin: "linkedin.com/in/love-4a74622a1".into(),
                github: "github.com/loveh4cks".into(),
                location: "Panipat, Haryana, India".into(),
            },
            footer: "© 2024 Love. All rights reserved.".into(),
        }
    }
}
