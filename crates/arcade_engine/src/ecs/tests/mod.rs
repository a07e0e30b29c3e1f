//! Cross-module tests: whole pipelines driven tick by tick

mod pipeline_scenarios;
