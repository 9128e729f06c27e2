//! Route labels for request spans and metrics.

use uuid::Uuid;

/// The request path with UUID segments collapsed, so order ids do not blow up
/// metric cardinality.
pub(super) fn route_label(path: &str) -> String {
    if path == "/" {
        return "/".to_owned();
    }

    let mut label = String::from("/");

    for (index, segment) in path.trim_start_matches('/').split('/').enumerate() {
        if index > 0 {
            label.push('/');
        }

        if Uuid::parse_str(segment).is_ok() {
            label.push_str("{uuid}");
        } else {
            label.push_str(segment);
        }
    }

    label
}
