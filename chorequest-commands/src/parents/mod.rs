pub mod addreward;
pub mod addtask;
pub mod embeds;
pub mod fulfill;
pub mod gate;
pub mod history;
pub mod lock;
pub mod pending;
pub mod removereward;
pub mod removetask;
pub mod unlock;
