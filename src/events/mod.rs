mod event;

pub use event::{
    Event, PayloadNodeDragEnd, PayloadNodeDragStart, PayloadNodeHoverEnter, PayloadNodeHoverLeave,
    PayloadNodeMove,
};
