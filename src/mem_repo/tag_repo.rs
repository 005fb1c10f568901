use crate::mem_repo::SharedState;
use crate::tag_repo::{NewTag, Tag, TagRepo, TagRepoError};
use async_trait::async_trait;

pub struct MemTagRepo {
    state: SharedState,
}

impl MemTagRepo {
    pub(crate) fn new(state: SharedState) -> MemTagRepo {
        MemTagRepo { state }
    }
}

#[async_trait]
impl TagRepo for MemTagRepo {
    async fn create_tag(&self, new_tag: NewTag) -> Result<i64, TagRepoError> {
        if new_tag.name.is_empty() {
            return Err(TagRepoError::EmptyName);
        }

        let mut write_guard = self.state.write_lock()?;

        let id = write_guard.next_tag_id;
        write_guard.next_tag_id += 1;
        write_guard.tags.insert(id, new_tag.to_tag(id));

        Ok(id)
    }

    async fn get_tag(&self, tag_id: i64) -> Result<Tag, TagRepoError> {
        if tag_id < 1 {
            return Err(TagRepoError::InvalidId(tag_id));
        }

        let read_guard = self.state.read_lock()?;
        read_guard
            .tags
            .get(&tag_id)
            .cloned()
            .ok_or(TagRepoError::TagNotFound(tag_id))
    }
}
