//! aria2 response payloads as they appear on the wire

use serde_json::{Value, json};

/// `tellStatus` of a torrent that is half downloaded: 12 pieces, first 6 done
pub fn torrent_status() -> Value {
    json!({
        "gid": "2089b05ecca3d829",
        "status": "active",
        "totalLength": "12582912",
        "completedLength": "6291456",
        "uploadLength": "3145728",
        "downloadSpeed": "1048576",
        "uploadSpeed": "65536",
        "numPieces": "12",
        "pieceLength": "1048576",
        "bitfield": "fc0",
        "connections": "3",
        "infoHash": "248d0a1cd08284299de78d5c1ed359bb46717d8c",
        "dir": "/downloads",
        "bittorrent": {
            "mode": "multi",
            "announceList": [["udp://tracker.example.org:6969"]],
            "info": { "name": "debian-live" }
        },
        "files": [
            {
                "index": "1",
                "path": "/downloads/debian-live/debian-live.iso",
                "length": "10485760",
                "completedLength": "6291456",
                "selected": "true",
                "uris": []
            },
            {
                "index": "2",
                "path": "/downloads/debian-live/SHA256SUMS",
                "length": "2097152",
                "completedLength": "0",
                "selected": "false",
                "uris": []
            }
        ]
    })
}

/// `tellStatus` of a plain HTTP download whose path is not known yet
pub fn http_status_without_path() -> Value {
    json!({
        "gid": "d7ab5e9d9a5b1a42",
        "status": "waiting",
        "totalLength": "0",
        "completedLength": "0",
        "downloadSpeed": "0",
        "uploadSpeed": "0",
        "files": [
            {
                "index": "1",
                "path": "",
                "length": "0",
                "completedLength": "0",
                "selected": "true",
                "uris": [
                    { "uri": "https://mirror.example.org/pub/archive.tar.xz", "status": "waiting" }
                ]
            }
        ]
    })
}

/// `getPeers` for [`torrent_status`]: one peer holding the missing half
pub fn complementary_peers() -> Value {
    json!([
        {
            "peerId": "%2DTR2940%2D",
            "ip": "203.0.113.7",
            "port": "51413",
            "bitfield": "03f",
            "amChoking": "true",
            "peerChoking": "false",
            "downloadSpeed": "524288",
            "uploadSpeed": "0",
            "seeder": "false"
        }
    ])
}

/// `tellActive` with the compact key set
pub fn active_list() -> Value {
    json!([
        {
            "gid": "2089b05ecca3d829",
            "status": "active",
            "totalLength": "100",
            "completedLength": "40",
            "downloadSpeed": "20",
            "uploadSpeed": "0"
        },
        {
            "gid": "e3b0c44298fc1c14",
            "status": "active",
            "totalLength": "not-a-number",
            "completedLength": null,
            "downloadSpeed": "0",
            "uploadSpeed": "0"
        }
    ])
}
