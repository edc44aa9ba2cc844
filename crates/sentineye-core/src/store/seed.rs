// ── Fixed startup dataset ──
//
// The dashboard core has no persistence; every process starts from this
// snapshot of a small two-building site.

use chrono::{TimeDelta, Utc};
use std::net::IpAddr;

use super::DataStore;
use crate::model::{
    Alert, AlertId, AlertSeverity, AlertStatus, Camera, CameraId, CameraStatus, SystemStatus,
};

pub(crate) const LOCATIONS: [&str; 6] = [
    "Building A",
    "Building B",
    "Parking Lot",
    "Main Entrance",
    "Lobby",
    "Warehouse",
];

pub(crate) fn baseline_status() -> SystemStatus {
    SystemStatus {
        storage_usage_pct: 78,
        retention_days: 45,
        cpu_load_pct: 32,
        memory_usage_pct: 65,
        server_status: "Healthy".into(),
        uptime: "14d 6h".into(),
    }
}

struct CameraRow(
    u32,
    &'static str,
    &'static str,
    CameraStatus,
    [u8; 4],
    bool,
    &'static str,
);

const CAMERAS: [CameraRow; 12] = [
    CameraRow(1, "Lobby Main", "Lobby", CameraStatus::Online, [192, 168, 1, 101], true, "2m ago"),
    CameraRow(2, "Lobby Elevator", "Lobby", CameraStatus::Online, [192, 168, 1, 102], true, "5m ago"),
    CameraRow(3, "Front Desk", "Lobby", CameraStatus::Offline, [192, 168, 1, 103], false, "1h ago"),
    CameraRow(4, "Building A East", "Building A", CameraStatus::Online, [192, 168, 1, 104], true, "10m ago"),
    CameraRow(5, "Building A West", "Building A", CameraStatus::Warning, [192, 168, 1, 105], false, "20m ago"),
    CameraRow(6, "Parking Lot North", "Parking Lot", CameraStatus::Online, [192, 168, 1, 106], true, "Just now"),
    CameraRow(7, "Parking Lot South", "Parking Lot", CameraStatus::Offline, [192, 168, 1, 107], false, "3h ago"),
    CameraRow(8, "Main Entrance Ext", "Main Entrance", CameraStatus::Online, [192, 168, 1, 108], true, "1m ago"),
    CameraRow(9, "Main Gate", "Main Entrance", CameraStatus::Warning, [192, 168, 1, 109], true, "15m ago"),
    CameraRow(10, "Warehouse Loading", "Warehouse", CameraStatus::Online, [192, 168, 1, 110], true, "5m ago"),
    CameraRow(11, "Warehouse Int", "Warehouse", CameraStatus::Online, [192, 168, 1, 111], true, "7m ago"),
    CameraRow(12, "Building B Hall", "Building B", CameraStatus::Online, [192, 168, 1, 112], true, "12m ago"),
];

pub(crate) fn populate(store: &DataStore) {
    for CameraRow(id, name, location, status, octets, recording, last_activity) in CAMERAS {
        store.insert_camera(Camera {
            id: CameraId::from(id),
            name: name.into(),
            location: location.into(),
            status,
            ip: IpAddr::from(octets),
            recording,
            last_activity: last_activity.into(),
        });
    }

    let now = Utc::now();
    let alerts = [
        Alert {
            id: AlertId::from(101),
            kind: "Intrusion".into(),
            severity: AlertSeverity::Critical,
            location: "Warehouse Loading".into(),
            camera_name: "Warehouse Loading".into(),
            description: "Person detected after hours".into(),
            timestamp: now - TimeDelta::minutes(8),
            status: AlertStatus::Unread,
        },
        Alert {
            id: AlertId::from(102),
            kind: "Motion".into(),
            severity: AlertSeverity::Medium,
            location: "Parking Lot North".into(),
            camera_name: "Parking Lot North".into(),
            description: "Vehicle entered restricted zone".into(),
            timestamp: now - TimeDelta::minutes(20),
            status: AlertStatus::Unread,
        },
        Alert {
            id: AlertId::from(103),
            kind: "Weapon Detected".into(),
            severity: AlertSeverity::Critical,
            location: "Main Gate".into(),
            camera_name: "Main Gate".into(),
            description: "Possible weapon detected on camera".into(),
            timestamp: now - TimeDelta::hours(1),
            status: AlertStatus::Read,
        },
        Alert {
            id: AlertId::from(104),
            kind: "Camera Offline".into(),
            severity: AlertSeverity::High,
            location: "Lobby".into(),
            camera_name: "Front Desk".into(),
            description: "Camera 003 dropped connection".into(),
            timestamp: now - TimeDelta::hours(2),
            status: AlertStatus::Unread,
        },
        Alert {
            id: AlertId::from(105),
            kind: "Motion".into(),
            severity: AlertSeverity::Low,
            location: "Building A".into(),
            camera_name: "Building A East".into(),
            description: "Motion detected in hallway".into(),
            timestamp: now - TimeDelta::days(1),
            status: AlertStatus::Resolved,
        },
    ];

    for alert in alerts {
        store.insert_alert(alert);
    }
}
