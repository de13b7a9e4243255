//! Compiled-in portfolio content.
//!
//! The workflow catalog and dossier are fixed inputs owned by content authoring;
//! nothing in the rest of the crate mutates them.

use crate::model::{Contact, Dossier, Job, Project, SkillCategory, StageDetail, Workflow};
use std::collections::HashMap;

fn detail(description: &'static str, tools: &[&'static str]) -> StageDetail {
    StageDetail {
        description,
        tools: tools.to_vec(),
    }
}

/// The workflow catalog, in display order.
pub fn catalog() -> Vec<Workflow> {
    vec![
        Workflow {
            name: "DevSecOps",
            stages: vec![
                "Code & Commit",
                "SAST/SCA Scan",
                "DAST Scan",
                "Containerize & Scan",
                "IaC Security",
                "Secure K8s Deploy",
                "Cloud & Endpoint Monitoring",
            ],
            details: HashMap::from([
                (
                    "Code & Commit",
                    detail(
                        "Securely versioning code and triggering automated CI/CD pipelines.",
                        &["Git", "GitHub Actions", "Jenkins"],
                    ),
                ),
                (
                    "SAST/SCA Scan",
                    detail(
                        "Analyzing static source code (SAST) and third-party dependencies (SCA).",
                        &["SonarQube", "Checkmarx", "Snyk"],
                    ),
                ),
                (
                    "DAST Scan",
                    detail(
                        "Running dynamic application security testing against a running application.",
                        &["OWASP ZAP"],
                    ),
                ),
                (
                    "Containerize & Scan",
                    detail(
                        "Packaging applications into hardened containers and scanning for vulnerabilities.",
                        &["Docker", "Aqua Security", "Falco"],
                    ),
                ),
                (
                    "IaC Security",
                    detail(
                        "Scanning Infrastructure as Code (IaC) for misconfigurations.",
                        &["Terraform", "Open Policy Agent"],
                    ),
                ),
                (
                    "Secure K8s Deploy",
                    detail(
                        "Automating secure deployment and configuration in Kubernetes.",
                        &["Kubernetes", "Helm"],
                    ),
                ),
                (
                    "Cloud & Endpoint Monitoring",
                    detail(
                        "Continuously monitoring cloud and endpoints for threats.",
                        &["Microsoft Sentinel", "AWS Security Hub", "CrowdStrike Falcon"],
                    ),
                ),
            ]),
        },
        Workflow {
            name: "Incident Response",
            stages: vec![
                "Detection & Analysis",
                "Containment",
                "Eradication",
                "Recovery",
                "Post-Incident",
            ],
            details: HashMap::from([
                (
                    "Detection & Analysis",
                    detail(
                        "Identifying and validating security incidents using SIEM and EDR alerts.",
                        &["Microsoft Sentinel", "CrowdStrike Falcon", "Wireshark"],
                    ),
                ),
                (
                    "Containment",
                    detail(
                        "Isolating affected systems to prevent further damage.",
                        &["Firewall Rules", "EDR Host Isolation"],
                    ),
                ),
                (
                    "Eradication",
                    detail(
                        "Removing the root cause of the incident and any malicious artifacts.",
                        &["Antivirus/Antimalware", "Patch Management"],
                    ),
                ),
                (
                    "Recovery",
                    detail(
                        "Restoring systems to normal operation and validating security.",
                        &["Backups", "Vulnerability Scanning"],
                    ),
                ),
                (
                    "Post-Incident",
                    detail(
                        "Conducting a root cause analysis and improving security controls.",
                        &["Runbooks", "Security Awareness Training"],
                    ),
                ),
            ]),
        },
        Workflow {
            name: "Data Loss Prevention (DLP)",
            stages: vec![
                "Data Discovery",
                "Data Classification",
                "Policy Creation",
                "Policy Enforcement",
                "Monitoring & Reporting",
            ],
            details: HashMap::from([
                (
                    "Data Discovery",
                    detail(
                        "Identifying and inventorying sensitive data across endpoints and cloud storage.",
                        &["Microsoft Purview Compliance"],
                    ),
                ),
                (
                    "Data Classification",
                    detail(
                        "Classifying data based on sensitivity (e.g., PHI) to apply appropriate controls.",
                        &["Data Labeling Policies"],
                    ),
                ),
                (
                    "Policy Creation",
                    detail(
                        "Defining rules to prevent unauthorized exfiltration or exposure of sensitive data.",
                        &["HIPAA Compliance Rules"],
                    ),
                ),
                (
                    "Policy Enforcement",
                    detail(
                        "Deploying agents and configuring cloud services to enforce DLP policies.",
                        &["Endpoint Agents", "Cloud DLP Services"],
                    ),
                ),
                (
                    "Monitoring & Reporting",
                    detail(
                        "Tracking DLP events, alerts, and generating compliance reports.",
                        &["SIEM Integration", "DLP Dashboards"],
                    ),
                ),
            ]),
        },
        Workflow {
            name: "SIEM & Alerting",
            stages: vec![
                "Log Collection",
                "Log Correlation & Analysis",
                "Alert Generation",
                "Investigation & Triage",
                "Automation & SOAR",
            ],
            details: HashMap::from([
                (
                    "Log Collection",
                    detail(
                        "Aggregating logs from diverse sources like firewalls, endpoints, and cloud services.",
                        &["AWS CloudWatch", "Azure Monitor"],
                    ),
                ),
                (
                    "Log Correlation & Analysis",
                    detail(
                        "Connecting events from different systems to identify potential threats.",
                        &["Microsoft Sentinel", "AWS Security Hub"],
                    ),
                ),
                (
                    "Alert Generation",
                    detail(
                        "Creating high-fidelity alerts based on correlation rules to flag suspicious activity.",
                        &["Custom SIEM Rules"],
                    ),
                ),
                (
                    "Investigation & Triage",
                    detail(
                        "Investigating alerts to determine their severity and impact.",
                        &["Threat Intelligence Feeds"],
                    ),
                ),
                (
                    "Automation & SOAR",
                    detail(
                        "Automating responses to common alerts to reduce manual effort.",
                        &["Remediation Workflows", "Playbooks"],
                    ),
                ),
            ]),
        },
    ]
}

/// The profile dossier content.
pub fn dossier() -> Dossier {
    Dossier {
        name: "Ashish Reddy A",
        title: "DevSecOps & Endpoint Security Architect",
        specializations: vec![
            "Incident Response",
            "Endpoint Security",
            "CI/CD Automation",
            "Kubernetes Security",
            "IaC Security",
        ],
        about: "I am a passionate DevSecOps and Endpoint Security Engineer with a proven \
                track record of integrating security throughout the development lifecycle. \
                I specialize in reducing production vulnerabilities, automating security \
                processes, and hardening cloud infrastructure using tools for CI/CD, \
                containerization, and Infrastructure as Code.",
        skills: vec![
            SkillCategory {
                name: "Cloud Security & SIEM",
                items: vec![
                    "Microsoft Sentinel",
                    "AWS Security Hub",
                    "SIEM Tuning & Automation",
                ],
            },
            SkillCategory {
                name: "DevSecOps & IaC Security",
                items: vec![
                    "Jenkins, GitHub Actions",
                    "Terraform, Kubernetes",
                    "Aqua Security, Falco",
                    "Container Hardening",
                ],
            },
            SkillCategory {
                name: "Application Security",
                items: vec![
                    "SAST (SonarQube, Checkmarx)",
                    "DAST (OWASP ZAP)",
                    "SCA (Snyk)",
                ],
            },
            SkillCategory {
                name: "Endpoint Security",
                items: vec![
                    "CrowdStrike Falcon",
                    "Microsoft Defender",
                    "EDR & DLP Policies",
                ],
            },
            SkillCategory {
                name: "Network & Vulnerability",
                items: vec!["Wireshark", "Nessus, Qualys", "IDS/IPS"],
            },
            SkillCategory {
                name: "Scripting & Automation",
                items: vec!["Python", "Bash", "Remediation Workflows"],
            },
        ],
        experience: vec![
            Job {
                title: "Security Operations Specialist",
                tenure: "Mankind America (Jan 2025 - Present)",
                highlights: vec![
                    "Developed incident response and remediation workflows in CI/CD pipelines.",
                    "Engineered Jenkins and GitHub Actions integrations to automate IaC compliance checks.",
                ],
            },
            Job {
                title: "Security Engineer",
                tenure: "Humana (Jan 2024 - Dec 2024)",
                highlights: vec![
                    "Handled 100+ security alerts daily through AWS Security Hub and Microsoft Sentinel.",
                    "Rolled out advanced EDR and device-compliance policies across 10,000+ endpoints.",
                ],
            },
            Job {
                title: "Cybersecurity Engineer",
                tenure: "Bytes Soft Solutions (Apr 2020 - July 2022)",
                highlights: vec![
                    "Led a 3-member security team for Defender deployment and incident response across client environments.",
                    "Tuned SIEM configurations to boost detection accuracy by 25% and increase network visibility.",
                ],
            },
        ],
        projects: vec![
            Project {
                name: "IoT Smart City Security",
                summary: "Developed and implemented a decentralized, self-healing security \
                          framework for smart city IoT networks.",
            },
            Project {
                name: "Random Nexus: High-Entropy Key Generation",
                summary: "Multi-source randomness aggregation system to strengthen \
                          encryption key unpredictability.",
            },
        ],
        contact: Contact {
            email: "ashishreddya01@gmail.com",
            phone: "+1 248-710-5845",
            linkedin: "linkedin.com/in/ashish-Reddy",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_stages_are_unique_within_each_workflow() {
        for wf in catalog() {
            let mut seen = std::collections::HashSet::new();
            for stage in &wf.stages {
                assert!(seen.insert(*stage), "{}: duplicate stage {stage}", wf.name);
            }
        }
    }

    #[test]
    fn every_stage_has_a_detail_entry() {
        for wf in catalog() {
            for stage in &wf.stages {
                let d = wf.detail(stage);
                assert!(d.is_some(), "{}: missing detail for {stage}", wf.name);
                let d = d.unwrap();
                assert!(!d.description.is_empty());
                assert!(!d.tools.is_empty());
            }
        }
    }

    #[test]
    fn devsecops_shape_matches_content_set() {
        let cat = catalog();
        let devsecops = &cat[0];
        assert_eq!(devsecops.name, "DevSecOps");
        assert_eq!(devsecops.stage_count(), 7);
        assert_eq!(devsecops.stages[2], "DAST Scan");
        assert_eq!(devsecops.stages[4], "IaC Security");
        assert_eq!(devsecops.detail("DAST Scan").unwrap().tools, vec!["OWASP ZAP"]);
    }

    #[test]
    fn catalog_has_four_workflows_in_display_order() {
        let names: Vec<&str> = catalog().iter().map(|w| w.name).collect();
        assert_eq!(
            names,
            vec![
                "DevSecOps",
                "Incident Response",
                "Data Loss Prevention (DLP)",
                "SIEM & Alerting",
            ]
        );
    }
}
