//! Doctor command for system diagnostics
//!
//! Health checks for the advisor and the garment-triage pipeline.

use colored::*;
use std::path::PathBuf;
use sysinfo::System;

use crate::config::Config;

/// Health check result
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthStatus {
    Pass,
    Warn(String),
    Fail(String),
}

/// Individual health check
#[derive(Debug)]
pub struct HealthCheck {
    pub name: String,
    pub status: HealthStatus,
}

/// Full diagnostics report
#[derive(Debug)]
pub struct DoctorReport {
    pub checks: Vec<HealthCheck>,
}

impl DoctorReport {
    pub fn is_healthy(&self) -> bool {
        self.checks
            .iter()
            .all(|c| !matches!(c.status, HealthStatus::Fail(_)))
    }

    pub fn print(&self) {
        println!("\n{}", "EcoBuddy diagnostics".bold());
        for check in &self.checks {
            match &check.status {
                HealthStatus::Pass => {
                    println!("  {} {}", "✓".green(), check.name);
                }
                HealthStatus::Warn(msg) => {
                    println!("  {} {} - {}", "!".yellow(), check.name, msg.dimmed());
                }
                HealthStatus::Fail(msg) => {
                    println!("  {} {} - {}", "✗".red(), check.name, msg);
                }
            }
        }
        println!();
    }
}

/// Doctor diagnostics system
pub struct Doctor {
    model_dir: Option<PathBuf>,
}

impl Doctor {
    pub fn new(model_dir: Option<PathBuf>) -> Self {
        Self { model_dir }
    }

    /// Run all health checks
    pub fn run_checks(&self) -> DoctorReport {
        let checks = vec![
            self.check_config(),
            self.check_model_artifact(),
            self.check_disk_space(),
            self.check_memory(),
            self.check_home_writable(),
        ];

        DoctorReport { checks }
    }

    /// Check 1: configuration loads (or is created) cleanly
    fn check_config(&self) -> HealthCheck {
        match Config::load() {
            Ok(_) => HealthCheck {
                name: "Configuration".to_string(),
                status: HealthStatus::Pass,
            },
            Err(e) => HealthCheck {
                name: "Configuration".to_string(),
                status: HealthStatus::Fail(format!("cannot load config: {}", e)),
            },
        }
    }

    /// Check 2: garment model artifact present
    fn check_model_artifact(&self) -> HealthCheck {
        let name = "Garment model".to_string();

        let Some(dir) = self.model_dir.as_deref() else {
            return HealthCheck {
                name,
                status: HealthStatus::Warn("no model directory configured".to_string()),
            };
        };

        if !dir.exists() {
            return HealthCheck {
                name,
                status: HealthStatus::Warn(format!(
                    "model directory {} does not exist; 'classify' will fail",
                    dir.display()
                )),
            };
        }

        if !dir.join("model.safetensors").exists() {
            return HealthCheck {
                name,
                status: HealthStatus::Fail(format!(
                    "{} has no model.safetensors",
                    dir.display()
                )),
            };
        }

        HealthCheck {
            name,
            status: HealthStatus::Pass,
        }
    }

    /// Check 3: disk space on the volume holding the state directory
    fn check_disk_space(&self) -> HealthCheck {
        use sysinfo::Disks;
        let disks = Disks::new_with_refreshed_list();

        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));

        for disk in &disks {
            if home.starts_with(disk.mount_point()) {
                let available_gb = disk.available_space() / (1024 * 1024 * 1024);

                let status = if available_gb < 1 {
                    HealthStatus::Warn(format!("less than 1 GB available ({} GB)", available_gb))
                } else {
                    HealthStatus::Pass
                };
                return HealthCheck {
                    name: "Disk Space".to_string(),
                    status,
                };
            }
        }

        HealthCheck {
            name: "Disk Space".to_string(),
            status: HealthStatus::Warn("could not resolve disk for home directory".to_string()),
        }
    }

    /// Check 4: enough memory to load the model
    fn check_memory(&self) -> HealthCheck {
        let mut system = System::new();
        system.refresh_memory();

        let available_mb = system.available_memory() / (1024 * 1024);
        let status = if available_mb < 256 {
            HealthStatus::Warn(format!("only {} MB memory available", available_mb))
        } else {
            HealthStatus::Pass
        };

        HealthCheck {
            name: "Memory".to_string(),
            status,
        }
    }

    /// Check 5: state directory writable (history, transcripts)
    fn check_home_writable(&self) -> HealthCheck {
        let name = "State directory".to_string();

        let Some(home) = dirs::home_dir() else {
            return HealthCheck {
                name,
                status: HealthStatus::Fail("cannot determine home directory".to_string()),
            };
        };

        let state_dir = home.join(".ecobuddy");
        match std::fs::create_dir_all(&state_dir) {
            Ok(()) => HealthCheck {
                name,
                status: HealthStatus::Pass,
            },
            Err(e) => HealthCheck {
                name,
                status: HealthStatus::Fail(format!(
                    "cannot create {}: {}",
                    state_dir.display(),
                    e
                )),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_model_dir_warns() {
        let doctor = Doctor::new(Some(PathBuf::from("/definitely/not/here")));
        let check = doctor.check_model_artifact();
        assert!(matches!(check.status, HealthStatus::Warn(_)));
    }

    #[test]
    fn test_unconfigured_model_dir_warns() {
        let doctor = Doctor::new(None);
        let check = doctor.check_model_artifact();
        assert!(matches!(check.status, HealthStatus::Warn(_)));
    }

    #[test]
    fn test_dir_without_weights_fails() {
        let dir = TempDir::new().unwrap();
        let doctor = Doctor::new(Some(dir.path().to_path_buf()));
        let check = doctor.check_model_artifact();
        assert!(matches!(check.status, HealthStatus::Fail(_)));
    }

    #[test]
    fn test_dir_with_weights_passes() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("model.safetensors"), b"stub").unwrap();
        let doctor = Doctor::new(Some(dir.path().to_path_buf()));
        let check = doctor.check_model_artifact();
        assert_eq!(check.status, HealthStatus::Pass);
    }

    #[test]
    fn test_report_health() {
        let report = DoctorReport {
            checks: vec![
                HealthCheck {
                    name: "a".to_string(),
                    status: HealthStatus::Pass,
                },
                HealthCheck {
                    name: "b".to_string(),
                    status: HealthStatus::Warn("w".to_string()),
                },
            ],
        };
        assert!(report.is_healthy());

        let report = DoctorReport {
            checks: vec![HealthCheck {
                name: "c".to_string(),
                status: HealthStatus::Fail("f".to_string()),
            }],
        };
        assert!(!report.is_healthy());
    }
}
