use crate::commands::JUMP_TO_ANNOTATION;
use crate::models::{Annotation, CollapsibleState, CommandInvocation, TreeItem};
use std::collections::BTreeMap;

pub const VIEW_ID: &str = "annotationsView";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileGroup {
    pub file_path: String,
    pub annotations: Vec<Annotation>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode {
    FileGroup(FileGroup),
    AnnotationLeaf(Annotation),
}

/// Groups ordered by file path; each group's records by line, ties in store order.
pub fn group_by_file(annotations: &[Annotation]) -> Vec<FileGroup> {
    let mut groups: BTreeMap<&str, Vec<Annotation>> = BTreeMap::new();
    for record in annotations {
        groups
            .entry(record.file_path.as_str())
            .or_default()
            .push(record.clone());
    }

    groups
        .into_iter()
        .map(|(file_path, mut records)| {
            records.sort_by_key(|record| record.line_number);
            FileGroup {
                file_path: file_path.to_string(),
                annotations: records,
            }
        })
        .collect()
}

pub fn children(annotations: &[Annotation], parent: Option<&TreeNode>) -> Vec<TreeNode> {
    match parent {
        None => group_by_file(annotations)
            .into_iter()
            .map(TreeNode::FileGroup)
            .collect(),
        Some(TreeNode::FileGroup(group)) => group
            .annotations
            .iter()
            .cloned()
            .map(TreeNode::AnnotationLeaf)
            .collect(),
        Some(TreeNode::AnnotationLeaf(_)) => Vec::new(),
    }
}

pub fn tree_item(node: &TreeNode) -> TreeItem {
    match node {
        TreeNode::FileGroup(group) => TreeItem {
            label: group.file_path.clone(),
            description: Some(count_label(group.annotations.len())),
            tooltip: Some(group.file_path.clone()),
            collapsible_state: CollapsibleState::Collapsed,
            context_value: "annotationFile".to_string(),
            command: None,
        },
        TreeNode::AnnotationLeaf(record) => TreeItem {
            label: format!("Line {}: {}", record.line_number, record.annotation),
            description: None,
            tooltip: Some(record.annotation.clone()),
            collapsible_state: CollapsibleState::None,
            context_value: "annotation".to_string(),
            command: Some(CommandInvocation {
                command: JUMP_TO_ANNOTATION.to_string(),
                title: "Jump to Annotation".to_string(),
                arguments: vec![serde_json::json!(record.reference())],
            }),
        },
    }
}

fn count_label(count: usize) -> String {
    if count == 1 {
        "1 annotation".to_string()
    } else {
        format!("{} annotations", count)
    }
}
