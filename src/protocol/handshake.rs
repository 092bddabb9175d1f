//! Handshake documents and the intersection algorithm.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::version::compare_versions_descending;

/// Capability lists per action, keyed by handshake name.
///
/// A `None` capability list and an absent action are semantically distinct:
/// absence means "do not use this action at all", while a present action
/// with no capabilities means "use it, but no optional behavior".
pub type ActionCapabilities = HashMap<String, Option<Vec<String>>>;

/// One party's full declared support matrix: version → action → capabilities.
///
/// Both the server's advertisement and a client's declaration use this type,
/// as does the negotiated agreement produced by [`HandshakeDocument::intersect`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HandshakeDocument {
    versions: HashMap<String, ActionCapabilities>,
}

impl HandshakeDocument {
    /// Empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace one version's action map.
    pub fn insert_version(&mut self, version: impl Into<String>, actions: ActionCapabilities) {
        self.versions.insert(version.into(), actions);
    }

    /// Whether the document declares the given version.
    pub fn contains_version(&self, version: &str) -> bool {
        self.versions.contains_key(version)
    }

    /// The action map declared for a version, if any.
    pub fn actions(&self, version: &str) -> Option<&ActionCapabilities> {
        self.versions.get(version)
    }

    /// Capability list declared for one action of one version.
    ///
    /// Returns `None` when the version or action is absent; `Some(None)` when
    /// the action is present without capabilities.
    pub fn capabilities(&self, version: &str, handshake_name: &str) -> Option<&Option<Vec<String>>> {
        self.versions.get(version)?.get(handshake_name)
    }

    /// Whether the document declares no versions.
    pub fn is_empty(&self) -> bool {
        self.versions.is_empty()
    }

    /// Number of declared versions.
    pub fn len(&self) -> usize {
        self.versions.len()
    }

    /// Intersect two support matrices into a negotiated agreement.
    ///
    /// A version survives only if both sides declare it, and for each common
    /// action the capability list is the set intersection, in this document's
    /// order. An empty intersection collapses to `None` rather than dropping
    /// the action: an action both parties support with zero shared optional
    /// features remains usable.
    pub fn intersect(&self, other: &Self) -> Self {
        let mut versions = HashMap::new();
        for (version, actions) in &self.versions {
            let Some(other_actions) = other.versions.get(version) else {
                continue;
            };
            let mut common_actions = ActionCapabilities::new();
            for (action, capabilities) in actions {
                let Some(other_capabilities) = other_actions.get(action) else {
                    continue;
                };
                let theirs: HashSet<&str> = other_capabilities
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .map(String::as_str)
                    .collect();
                let shared: Vec<String> = capabilities
                    .as_deref()
                    .unwrap_or_default()
                    .iter()
                    .filter(|c| theirs.contains(c.as_str()))
                    .cloned()
                    .collect();
                let shared = if shared.is_empty() { None } else { Some(shared) };
                common_actions.insert(action.clone(), shared);
            }
            versions.insert(version.clone(), common_actions);
        }
        Self { versions }
    }

    /// Select the negotiated version: the highest entry under descending
    /// string order, or `None` for an empty document.
    ///
    /// This is a deterministic policy, not a semantic "best" pick; a version
    /// string that sorts higher but is chronologically older is still chosen.
    pub fn negotiated_version(&self) -> Option<(&str, &ActionCapabilities)> {
        self.versions
            .iter()
            .max_by(|(a, _), (b, _)| a.as_str().cmp(b.as_str()))
            .map(|(version, actions)| (version.as_str(), actions))
    }
}

#[derive(Serialize, Deserialize)]
struct WireDocument {
    #[serde(default)]
    versions: Vec<WireVersion>,
}

#[derive(Serialize, Deserialize)]
struct WireVersion {
    version: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    actions: Vec<WireAction>,
}

#[derive(Serialize, Deserialize)]
struct WireAction {
    action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    supports: Option<Vec<String>>,
}

impl Serialize for HandshakeDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut version_keys: Vec<&String> = self.versions.keys().collect();
        version_keys.sort_by(|a, b| compare_versions_descending(a, b));

        let versions = version_keys
            .into_iter()
            .map(|version| {
                let actions_map = &self.versions[version];
                let mut action_keys: Vec<&String> = actions_map.keys().collect();
                action_keys.sort();

                let actions = action_keys
                    .into_iter()
                    .map(|action| WireAction {
                        action: action.clone(),
                        // An empty capability list serializes with no
                        // `supports` key at all, same as a missing one.
                        supports: match &actions_map[action] {
                            Some(caps) if !caps.is_empty() => Some(caps.clone()),
                            _ => None,
                        },
                    })
                    .collect();

                WireVersion {
                    version: version.clone(),
                    actions,
                }
            })
            .collect();

        WireDocument { versions }.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for HandshakeDocument {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let wire = WireDocument::deserialize(deserializer)?;
        let mut versions = HashMap::new();
        for version in wire.versions {
            let actions = version
                .actions
                .into_iter()
                .map(|a| (a.action, a.supports))
                .collect();
            versions.insert(version.version, actions);
        }
        Ok(Self { versions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn sample_server_document() -> HandshakeDocument {
        let mut doc = HandshakeDocument::new();
        doc.insert_version("2022-10", ActionCapabilities::new());
        doc.insert_version(
            "2020-10",
            ActionCapabilities::from([
                ("action_OTA_Ping".to_string(), None),
                ("action_OTA_Read".to_string(), None),
                (
                    "action_OTA_HotelInvCountNotif".to_string(),
                    Some(vec![
                        "OTA_HotelInvCountNotif_accept_rooms".to_string(),
                        "OTA_HotelInvCountNotif_accept_deltas".to_string(),
                        "OTA_HotelInvCountNotif_accept_closing_seasons".to_string(),
                    ]),
                ),
            ]),
        );
        doc.insert_version(
            "2018-10",
            ActionCapabilities::from([("action_OTA_Ping".to_string(), None)]),
        );
        doc
    }

    #[test]
    fn test_serialize_sorted_and_supports_omitted() {
        let doc = sample_server_document();
        let json = serde_json::to_value(&doc).unwrap();

        let versions = json["versions"].as_array().unwrap();
        let ids: Vec<&str> = versions
            .iter()
            .map(|v| v["version"].as_str().unwrap())
            .collect();
        assert_eq!(ids, vec!["2022-10", "2020-10", "2018-10"]);

        // Version with no actions omits the array entirely.
        assert!(versions[0].get("actions").is_none());

        // Actions sorted ascending by handshake name.
        let actions = versions[1]["actions"].as_array().unwrap();
        let names: Vec<&str> = actions
            .iter()
            .map(|a| a["action"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec![
                "action_OTA_HotelInvCountNotif",
                "action_OTA_Ping",
                "action_OTA_Read"
            ]
        );

        // No `supports` key for a capability-free action.
        assert!(actions[1].get("supports").is_none());
        assert_eq!(
            actions[0]["supports"].as_array().unwrap().len(),
            3,
            "capability list preserved"
        );
    }

    #[test]
    fn test_deserialize() {
        let json = r#"{
            "versions": [
                {"version": "2022-10"},
                {"version": "2020-10", "actions": [
                    {"action": "action_OTA_Ping"},
                    {"action": "action_OTA_HotelInvCountNotif",
                     "supports": ["OTA_HotelInvCountNotif_accept_rooms"]}
                ]}
            ]
        }"#;

        let doc: HandshakeDocument = serde_json::from_str(json).unwrap();
        assert!(doc.contains_version("2022-10"));
        assert!(doc.actions("2022-10").unwrap().is_empty());
        assert_eq!(
            doc.capabilities("2020-10", "action_OTA_Ping"),
            Some(&None)
        );
        assert_eq!(
            doc.capabilities("2020-10", "action_OTA_HotelInvCountNotif"),
            Some(&Some(vec![
                "OTA_HotelInvCountNotif_accept_rooms".to_string()
            ]))
        );
    }

    #[test]
    fn test_round_trip_collapses_empty_capability_list() {
        // Documented asymmetry: an empty-but-present capability list encodes
        // with no `supports` key and decodes back as None.
        let mut doc = HandshakeDocument::new();
        doc.insert_version(
            "2020-10",
            ActionCapabilities::from([("action_OTA_Ping".to_string(), Some(Vec::new()))]),
        );

        let json = serde_json::to_string(&doc).unwrap();
        let decoded: HandshakeDocument = serde_json::from_str(&json).unwrap();

        assert_eq!(decoded.capabilities("2020-10", "action_OTA_Ping"), Some(&None));
        assert_ne!(doc, decoded);
    }

    #[test]
    fn test_intersect() {
        let server = sample_server_document();

        let mut client = HandshakeDocument::new();
        client.insert_version(
            "2020-10",
            ActionCapabilities::from([
                ("action_OTA_Ping".to_string(), None),
                (
                    "action_OTA_HotelInvCountNotif".to_string(),
                    Some(vec![
                        "OTA_HotelInvCountNotif_accept_categories".to_string(),
                        "OTA_HotelInvCountNotif_accept_deltas".to_string(),
                    ]),
                ),
            ]),
        );
        client.insert_version(
            "2018-10",
            ActionCapabilities::from([("action_OTA_Ping".to_string(), None)]),
        );

        let agreement = server.intersect(&client);

        // 2022-10 exists only on the server side and is dropped.
        assert!(!agreement.contains_version("2022-10"));
        assert!(agreement.contains_version("2018-10"));

        // action_OTA_Read exists only on the server side and is dropped;
        // the ping action survives with no capabilities.
        let actions = agreement.actions("2020-10").unwrap();
        assert!(!actions.contains_key("action_OTA_Read"));
        assert_eq!(actions["action_OTA_Ping"], None);

        // Only the shared capability survives.
        assert_eq!(
            actions["action_OTA_HotelInvCountNotif"],
            Some(vec!["OTA_HotelInvCountNotif_accept_deltas".to_string()])
        );
    }

    #[test]
    fn test_intersect_keeps_action_with_empty_intersection() {
        let mut a = HandshakeDocument::new();
        a.insert_version(
            "2020-10",
            ActionCapabilities::from([(
                "action_OTA_HotelInvCountNotif".to_string(),
                Some(vec!["cap_a".to_string()]),
            )]),
        );
        let mut b = HandshakeDocument::new();
        b.insert_version(
            "2020-10",
            ActionCapabilities::from([(
                "action_OTA_HotelInvCountNotif".to_string(),
                Some(vec!["cap_b".to_string()]),
            )]),
        );

        let agreement = a.intersect(&b);
        assert_eq!(
            agreement.capabilities("2020-10", "action_OTA_HotelInvCountNotif"),
            Some(&None),
            "action stays usable with zero shared capabilities"
        );
    }

    #[test]
    fn test_negotiated_version_picks_highest_string() {
        let doc = sample_server_document();
        let (version, _) = doc.negotiated_version().unwrap();
        assert_eq!(version, "2022-10");

        assert!(HandshakeDocument::new().negotiated_version().is_none());
    }

    fn arb_document() -> impl Strategy<Value = HandshakeDocument> {
        let caps = proptest::option::of(prop::collection::vec("cap_[a-d]", 0..4));
        let actions = prop::collection::hash_map("action_[a-c]", caps, 0..3);
        prop::collection::hash_map("20[12][0-9]-10", actions, 0..4)
            .prop_map(|versions| {
                let mut doc = HandshakeDocument::new();
                for (version, actions) in versions {
                    doc.insert_version(version, actions);
                }
                doc
            })
    }

    proptest! {
        #[test]
        fn prop_intersection_is_subset_of_both(a in arb_document(), b in arb_document()) {
            let agreement = a.intersect(&b);
            for (version, actions) in &agreement.versions {
                prop_assert!(a.contains_version(version));
                prop_assert!(b.contains_version(version));
                for (action, capabilities) in actions {
                    let ours = a.capabilities(version, action).unwrap();
                    let theirs = b.capabilities(version, action).unwrap();
                    prop_assert!(theirs.is_some() || capabilities.is_none());
                    for cap in capabilities.as_deref().unwrap_or_default() {
                        prop_assert!(ours.as_deref().unwrap_or_default().contains(cap));
                        prop_assert!(theirs.as_deref().unwrap_or_default().contains(cap));
                    }
                }
            }
        }
    }
}
