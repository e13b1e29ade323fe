/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/main.rs
// natsea-example wires generated NATS clients to an in-memory
// transport: it publishes a few sensor readings, answers lookups
// with a responder, and prints what went over the wire.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use clap::Parser;
use eyre::WrapErr;
use natsea::codec::{CodecRegistry, YamlCodec};
use natsea::{
    InMemoryTransport, NatsConfig, NatsConnections, NatsTransport, nats_client,
};
use serde::{Deserialize, Serialize};
use tracing::metadata::LevelFilter;
use tracing_subscriber::filter::EnvFilter;

#[derive(Parser)]
#[clap(about = "Publish typed messages through natsea")]
pub struct Options {
    #[clap(long, short = 'f', help = "Path to TOML configuration file")]
    config_file: Option<PathBuf>,

    #[clap(long, default_value = "hedgehog-01", help = "Sensor publishing readings")]
    sensor: String,

    #[clap(long, default_value_t = 3, help = "Number of readings to publish")]
    readings: u32,

    #[clap(long, help = "Prefer YAML over JSON for structured payloads")]
    yaml: bool,

    #[clap(
        long,
        default_value_t = 1000,
        help = "Published messages the in-memory server keeps (0 keeps none)"
    )]
    record_limit: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    pub sensor: String,
    pub celsius: f64,
    pub taken_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorInfo {
    pub sensor: String,
    pub location: String,
}

nats_client! {
    // TelemetryClient publishes to the telemetry connection.
    pub struct TelemetryClient (connection = "telemetry") {
        /// Publish one temperature reading.
        #[subject = "sensors.readings"]
        pub async fn reading(&self, reading: SensorReading);

        #[subject = "sensors.heartbeat"]
        pub async fn heartbeat(&self, sensor: String);
    }
}

nats_client! {
    pub struct InventoryClient {
        #[subject = "inventory.sensors.lookup"]
        pub async fn lookup(&self, sensor: String) -> SensorInfo;
    }
}

#[tokio::main]
async fn main() -> Result<(), eyre::Report> {
    let options = Options::parse();

    let env_filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
        .add_directive("natsea=debug".parse()?);
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = match &options.config_file {
        Some(path) => NatsConfig::load(path).wrap_err("Failed to load NATS config")?,
        None => NatsConfig::from_toml_str(
            r#"
            request_timeout = "2s"

            [connections.default]
            [connections.telemetry]
            headers = { source = "natsea-example" }
            "#,
        )?,
    };

    // Every configured connection shares one in-memory "server".
    let server = Arc::new(InMemoryTransport::new().with_record_limit(options.record_limit));
    let connections = NatsConnections::from_config(&config, |_, _| {
        server.clone() as Arc<dyn NatsTransport>
    });

    let mut builder = CodecRegistry::builder().with_default_codecs();
    if options.yaml {
        builder = builder.register(YamlCodec::with_priority(190));
    }
    let registry = Arc::new(builder.build());
    tracing::info!("Codecs in selection order: {:?}", registry.codec_names());

    let mut readings = server.subscribe("sensors.>").await?;
    let sensor = options.sensor.clone();
    server
        .respond_with("inventory.sensors.lookup", move |request| {
            let name = String::from_utf8_lossy(request.payload()).to_string();
            if name != sensor {
                return Vec::new();
            }
            serde_json::to_vec(&SensorInfo {
                sensor: name,
                location: "burrow-7".to_string(),
            })
            .unwrap_or_default()
        })
        .await;

    // Clients pick up per-connection timeouts and headers from config.
    let telemetry = TelemetryClient::from_connections(&connections, registry.clone())?;
    let inventory = InventoryClient::from_connections(&connections, registry.clone())?;

    telemetry.heartbeat(&options.sensor).await?;
    for i in 0..options.readings {
        telemetry
            .reading(&SensorReading {
                sensor: options.sensor.clone(),
                celsius: 20.0 + f64::from(i) * 0.5,
                taken_at: Utc::now(),
            })
            .await?;
    }

    while let Ok(Some(message)) =
        tokio::time::timeout(Duration::from_millis(50), readings.recv()).await
    {
        tracing::info!(
            "Received on '{}' ({:?}): {}",
            message.subject,
            message.headers,
            String::from_utf8_lossy(&message.payload)
        );
    }

    match inventory.lookup(&options.sensor).await? {
        Some(info) => tracing::info!("Sensor {} lives in {}", info.sensor, info.location),
        None => tracing::info!("Sensor {} is not in the inventory", options.sensor),
    }
    match inventory.lookup(&"unknown-sensor".to_string()).await? {
        Some(info) => tracing::info!("Unexpected inventory entry: {:?}", info),
        None => tracing::info!("unknown-sensor is not in the inventory"),
    }

    tracing::info!(
        "Telemetry publish stats: {:?}",
        telemetry.dispatcher().publish_stats()
    );
    Ok(())
}
