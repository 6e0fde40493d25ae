use crate::config::EvictionPolicy;
use crate::data_types::PanelId;
use std::collections::VecDeque;

/// Bounded, ordered set of the panels currently shown. Rank 0 is the panel
/// that has been visible the longest and is drawn at the top.
#[derive(Clone, Debug)]
pub struct VisibleQueue {
    members: VecDeque<PanelId>,
    capacity: usize,
    policy: EvictionPolicy,
}

impl VisibleQueue {
    pub fn new(capacity: usize, policy: EvictionPolicy) -> Self {
        Self {
            members: VecDeque::with_capacity(capacity),
            capacity: capacity.max(1),
            policy,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn policy(&self) -> EvictionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, id: PanelId) -> bool {
        self.members.contains(&id)
    }

    /// Position of `id` in the queue, which is also its layout slot.
    pub fn rank(&self, id: PanelId) -> Option<usize> {
        self.members.iter().position(|&m| m == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = PanelId> + '_ {
        self.members.iter().copied()
    }

    /// Appends `id` and returns the member evicted to stay within capacity.
    /// Pushing a member already present is a no-op.
    pub fn push(&mut self, id: PanelId) -> Option<PanelId> {
        if self.contains(id) {
            return None;
        }
        match self.policy {
            EvictionPolicy::OldestFirst => {
                self.members.push_back(id);
                if self.members.len() > self.capacity {
                    self.members.pop_front()
                } else {
                    None
                }
            }
            EvictionPolicy::NewestFirst => {
                let evicted = if self.members.len() >= self.capacity {
                    self.members.pop_back()
                } else {
                    None
                };
                self.members.push_back(id);
                evicted
            }
        }
    }

    pub fn remove(&mut self, id: PanelId) -> bool {
        match self.rank(id) {
            Some(pos) => {
                self.members.remove(pos);
                true
            }
            None => false,
        }
    }
}
