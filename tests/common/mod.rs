#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::process::Output;
use std::sync::{Arc, Mutex};

use assert_fs::prelude::*;
use serde_json::{json, Value};
use tokio::task;
use warp::http::StatusCode;
use warp::Filter;

pub type OptimizeCalls = Arc<Mutex<Vec<HashMap<String, String>>>>;

pub struct MockBackend {
    pub addr: SocketAddr,
    pub optimize_calls: OptimizeCalls,
}

impl MockBackend {
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn optimize_query_values(&self, key: &str) -> Vec<String> {
        self.optimize_calls
            .lock()
            .unwrap()
            .iter()
            .map(|query| query.get(key).cloned().unwrap_or_default())
            .collect()
    }
}

pub fn risk_records() -> Value {
    json!([
        {"Machine_ID": "M1", "failure_probability": 0.05, "health_score": 88.2, "risk_level": "Healthy"},
        {"Machine_ID": "M2", "failure_probability": 0.4, "health_score": 61.0, "risk_level": "Warning"},
        {"Machine_ID": "M3", "failure_probability": 0.9, "health_score": 22.4, "risk_level": "High Risk"}
    ])
}

/// Two jobs on M1 (one late), idle M2, one unassigned job.
pub fn full_schedule() -> Value {
    json!({
        "machine_schedules": {
            "M1": {"type": "CNC", "available_time": 10, "schedule": [
                {"Job_ID": "J1", "start": 0, "end": 4, "deadline_hours": 5, "revenue": 100},
                {"Job_ID": "J2", "start": 4, "end": 10, "deadline_hours": 8, "revenue": 50}
            ]},
            "M2": {"type": "Lathe", "available_time": 0, "schedule": []}
        },
        "unassigned_jobs": ["J3"]
    })
}

pub fn empty_schedule() -> Value {
    json!({
        "machine_schedules": {
            "M1": {"type": "CNC", "available_time": 0, "schedule": []}
        },
        "unassigned_jobs": ["J1", "J2", "J3"]
    })
}

/// Serves every backend endpoint; `optimize` picks the optimizer reply from
/// the request's query parameters.
pub fn spawn_backend<F>(optimize: F) -> MockBackend
where
    F: Fn(&HashMap<String, String>) -> (StatusCode, Value) + Clone + Send + Sync + 'static,
{
    let health = warp::path("health")
        .and(warp::get())
        .map(|| warp::reply::json(&json!({"status": "ok"})));
    let generate = warp::path("generate-data").and(warp::post()).map(|| {
        warp::reply::json(&json!({"message": "Synthetic data generated", "machines": 3, "jobs": 3}))
    });
    let train = warp::path("train-model").and(warp::post()).map(|| {
        warp::reply::json(&json!({
            "message": "Model trained",
            "metrics": {"accuracy": 0.9, "f1_score": 0.75},
            "predictions": []
        }))
    });
    let risk = warp::path("high-risk-machines")
        .and(warp::get())
        .map(|| warp::reply::json(&risk_records()));
    let machines = warp::path("machines").and(warp::get()).map(|| {
        warp::reply::json(&json!([
            {"Machine_ID": "M1", "Machine_Type": "CNC", "Machine_Age": 4, "Avg_Temperature": 61.2, "Avg_Vibration": 1.4},
            {"Machine_ID": "M2", "Machine_Type": "Lathe", "Machine_Age": 9, "Avg_Temperature": 88.0, "Avg_Vibration": 4.1}
        ]))
    });
    let jobs = warp::path("jobs").and(warp::get()).map(|| {
        warp::reply::json(&json!([
            {"Job_ID": "J1", "Required_Machine_Type": "CNC", "Processing_Time_Hours": 4, "Priority_Level": 5, "Deadline_Hours": 5, "Revenue_Per_Job": 100},
            {"Job_ID": "J2", "Required_Machine_Type": "CNC", "Processing_Time_Hours": 6, "Priority_Level": 2, "Deadline_Hours": 8, "Revenue_Per_Job": 50}
        ]))
    });
    let maintenance = warp::path("simulate-maintenance").and(warp::get()).map(|| {
        warp::reply::json(&json!([
            {"Machine_ID": "M1",
             "immediate": {"cost": 700.0, "downtime": 2, "production_loss": 100},
             "delayed": {"cost": 130.0, "downtime": 0.3, "production_loss": 24.0}},
            {"Machine_ID": "M3",
             "immediate": {"cost": 700.0, "downtime": 2, "production_loss": 100},
             "delayed": {"cost": 2340.0, "downtime": 5.4, "production_loss": 432.0}}
        ]))
    });

    let optimize_calls: OptimizeCalls = Arc::new(Mutex::new(Vec::new()));
    let calls_for_route = optimize_calls.clone();
    let optimize_route = warp::path("optimize-schedule")
        .and(warp::post())
        .and(warp::query::<HashMap<String, String>>())
        .map(move |query: HashMap<String, String>| {
            calls_for_route.lock().unwrap().push(query.clone());
            let (status, body) = optimize(&query);
            warp::reply::with_status(warp::reply::json(&body), status)
        });

    let routes = health
        .or(generate)
        .or(train)
        .or(risk)
        .or(machines)
        .or(jobs)
        .or(maintenance)
        .or(optimize_route);
    let (addr, server) = warp::serve(routes).bind_ephemeral(([127, 0, 0, 1], 0));
    tokio::spawn(server);

    MockBackend {
        addr,
        optimize_calls,
    }
}

pub fn write_config(contents: &str) -> assert_fs::NamedTempFile {
    let config_file = assert_fs::NamedTempFile::new("fleetview.yaml").unwrap();
    config_file.write_str(contents).unwrap();
    config_file
}

pub fn config_for(backend: &MockBackend) -> assert_fs::NamedTempFile {
    write_config(&format!("base_url: {}\n", backend.base_url()))
}

/// Runs the binary off the async runtime so the mock server keeps serving.
pub async fn run_cli(args: Vec<String>) -> Output {
    task::spawn_blocking(move || {
        let mut cmd = assert_cmd::cargo_bin_cmd!("fleetview");
        cmd.args(&args).env_remove("FLEETVIEW_BASE_URL");
        cmd.output().unwrap()
    })
    .await
    .unwrap()
}

pub fn path_arg(path: &std::path::Path) -> String {
    path.to_str().unwrap().to_string()
}
