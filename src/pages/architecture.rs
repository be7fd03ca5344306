//! Architecture page - the whole Jukebox Inc MLOps document.
//!
//! Four sections, in order: data pipeline, model lifecycle, applications,
//! and edge cases. Everything here is static text.

use dioxus::prelude::*;
use jukebox_mlops_ui::{BulletList, Card, Figure, IconKind, NestedItem, Section, Topic};

use crate::components::{SiteFooter, SiteHeader};

/// Document title, shared by the page header, window title and export.
pub const DOCUMENT_TITLE: &str = "Jukebox Inc MLOps Architecture";

/// Tagline under the document title.
pub const DOCUMENT_TAGLINE: &str =
    "Comprehensive MLOps infrastructure design for a modern music platform";

/// Top-level section titles in render order.
pub const SECTION_TITLES: [&str; 4] = [
    "Data Pipeline & Infrastructure",
    "Model Lifecycle & Operationalization",
    "ML Applications",
    "Edge Cases & Assumptions",
];

/// Full architecture document.
#[component]
pub fn ArchitecturePage() -> Element {
    rsx! {
        div { class: "page",
            SiteHeader {
                title: DOCUMENT_TITLE.to_string(),
                tagline: DOCUMENT_TAGLINE.to_string(),
            }

            main { class: "page__main",
                DataPipelineSection {}
                ModelLifecycleSection {}
                ApplicationsSection {}
                EdgeCasesSection {}
            }

            SiteFooter { notice: "© 2025 Jukebox Inc. MLOps Architecture Documentation" }
        }
    }
}

#[component]
fn DataPipelineSection() -> Element {
    rsx! {
        Section { title: SECTION_TITLES[0].to_string(), icon: IconKind::Database,
            Card { title: "Data Ingestion Architecture",
                Figure { alt: "Data Pipeline Visualization" }
                BulletList {
                    li { "Event-driven streaming using Apache Kafka for real-time data ingestion" }
                    li { "Change Data Capture (CDC) using Debezium for database changes" }
                    li { "Delta Lake for reliable data storage and versioning" }
                    li { "Apache Airflow for orchestration of data pipelines" }
                }
            }

            Card { title: "Data Storage & Orchestration",
                div { class: "stack",
                    Topic { heading: "Storage Architecture",
                        BulletList {
                            NestedItem {
                                label: "Multi-layer data lake using Delta Lake format",
                                items: vec![
                                    "Bronze layer: Raw data ingestion",
                                    "Silver layer: Cleaned and validated data",
                                    "Gold layer: Business-ready aggregates",
                                ],
                            }
                            NestedItem {
                                label: "Partitioning strategy based on:",
                                items: vec![
                                    "Time-based partitioning for event data",
                                    "Geographic partitioning for country-specific data",
                                    "Hybrid partitioning for large tables",
                                ],
                            }
                        }
                    }
                    Topic { heading: "Data Orchestration",
                        BulletList {
                            NestedItem {
                                label: "Apache Airflow DAGs for:",
                                items: vec![
                                    "Daily data quality checks",
                                    "Feature computation pipelines",
                                    "Model retraining workflows",
                                ],
                            }
                            NestedItem {
                                label: "Databricks workflows for:",
                                items: vec![
                                    "Heavy ETL processing",
                                    "Distributed model training",
                                    "Batch inference jobs",
                                ],
                            }
                        }
                    }
                }
            }

            Card { title: "Feature Engineering Patterns",
                div { class: "stack stack--loose",
                    Topic { heading: "Credit Risk Assessment",
                        BulletList {
                            li { "Payment history aggregations (30/60/90 day windows)" }
                            li { "Usage pattern features (daily active hours, peak times)" }
                            li { "Location stability metrics" }
                            li { "Revenue trend indicators" }
                        }
                    }
                    Topic { heading: "Music Recommendations",
                        BulletList {
                            li { "Venue-specific play history embeddings" }
                            li { "Time-of-day preference vectors" }
                            li { "Genre affinity scores" }
                            li { "Collaborative filtering matrices" }
                        }
                    }
                    Topic { heading: "Fraud Detection",
                        BulletList {
                            li { "Real-time behavioral fingerprints" }
                            li { "Geographic anomaly indicators" }
                            li { "Usage pattern deviation scores" }
                            li { "Agent performance metrics" }
                        }
                    }
                    Topic { heading: "License Optimization",
                        BulletList {
                            li { "Song popularity trends" }
                            li { "Revenue per track metrics" }
                            li { "Seasonal demand patterns" }
                            li { "Cross-country popularity indicators" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ModelLifecycleSection() -> Element {
    rsx! {
        Section { title: SECTION_TITLES[1].to_string(), icon: IconKind::Workflow,
            Card { title: "Data Discovery & Access",
                Topic { heading: "Data Catalog & Discovery",
                    BulletList {
                        NestedItem {
                            label: "Centralized data catalog using Amundsen",
                            items: vec![
                                "Automated metadata extraction and indexing",
                                "Data lineage visualization",
                                "Usage statistics and popularity metrics",
                            ],
                        }
                        NestedItem {
                            label: "Self-service data access portal",
                            items: vec![
                                "Sample queries and notebooks",
                                "Documentation and schema information",
                                "Data quality metrics and SLAs",
                            ],
                        }
                    }
                }
            }

            Card { title: "Feature Management & Version Control",
                Topic { heading: "Feature Store",
                    BulletList {
                        NestedItem {
                            label: "Centralized feature repository using Feast",
                            items: vec![
                                "Feature versioning and dependency tracking",
                                "Online and offline feature serving",
                                "Feature sharing across models",
                            ],
                        }
                        NestedItem {
                            label: "Feature governance process",
                            items: vec![
                                "Impact analysis for feature changes",
                                "Automated testing of feature pipelines",
                                "Feature documentation requirements",
                            ],
                        }
                    }
                }
            }

            Card { title: "Experiment Tracking & Model Development",
                Topic { heading: "MLflow Integration",
                    BulletList {
                        NestedItem {
                            label: "Experiment management",
                            items: vec![
                                "Parameter tracking and versioning",
                                "Metrics logging and visualization",
                                "Model artifact storage",
                            ],
                        }
                        NestedItem {
                            label: "Model registry",
                            items: vec![
                                "Model versioning and staging",
                                "Model lineage tracking",
                                "A/B test results integration",
                            ],
                        }
                    }
                }
            }

            Card { title: "Model Deployment & Monitoring",
                Topic { heading: "Deployment Workflow",
                    BulletList {
                        NestedItem {
                            label: "Model promotion process",
                            items: vec![
                                "Automated validation tests",
                                "Performance benchmarking",
                                "Approval workflows",
                            ],
                        }
                        NestedItem {
                            label: "Deployment options",
                            items: vec![
                                "Batch inference pipelines",
                                "Real-time serving endpoints",
                                "Edge deployment for jukeboxes",
                            ],
                        }
                    }
                }
            }

            Card { title: "Performance Monitoring & Feedback",
                Topic { heading: "Monitoring Infrastructure",
                    BulletList {
                        NestedItem {
                            label: "Real-time metrics",
                            items: vec![
                                "Model performance dashboards",
                                "Data drift detection",
                                "System health metrics",
                            ],
                        }
                        NestedItem {
                            label: "Automated alerts",
                            items: vec![
                                "Performance degradation",
                                "Data quality issues",
                                "System failures",
                            ],
                        }
                    }
                }
            }

            Card { title: "Collaboration & Communication",
                Topic { heading: "Team Interaction",
                    BulletList {
                        NestedItem {
                            label: "Cross-functional workflows",
                            items: vec![
                                "Feature request process",
                                "Model deployment coordination",
                                "Incident response procedures",
                            ],
                        }
                        NestedItem {
                            label: "Documentation & knowledge sharing",
                            items: vec![
                                "Model cards and documentation",
                                "Best practices and guidelines",
                                "Training materials",
                            ],
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn ApplicationsSection() -> Element {
    rsx! {
        Section { title: SECTION_TITLES[2].to_string(), icon: IconKind::Boxes,
            div { class: "card-grid",
                Card { title: "Credit Risk Modeling",
                    p { class: "card__text",
                        "Batch inference system with daily updates, using historical payment data and customer behavior patterns."
                    }
                }
                Card { title: "Music Recommendations",
                    p { class: "card__text",
                        "Real-time recommendation engine using collaborative filtering and content-based approaches."
                    }
                }
                Card { title: "Fraud Detection",
                    p { class: "card__text",
                        "Stream processing system for real-time anomaly detection in sales and usage patterns."
                    }
                }
                Card { title: "License Optimization",
                    p { class: "card__text",
                        "Weekly batch processing for license renewal decisions based on usage analytics."
                    }
                }
            }
        }
    }
}

#[component]
fn EdgeCasesSection() -> Element {
    rsx! {
        Section { title: SECTION_TITLES[3].to_string(), icon: IconKind::AlertTriangle,
            Card { title: "Known Limitations",
                BulletList {
                    li { "Limited offline capabilities for recommendation engine" }
                    li { "Potential latency in cross-country data synchronization" }
                    li { "Network connectivity challenges in remote areas" }
                }
            }
        }
    }
}
