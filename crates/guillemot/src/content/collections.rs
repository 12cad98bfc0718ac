use std::collections::HashMap;
use std::path::PathBuf;

use derive_more::{Deref, DerefMut};

use crate::content::Post;

#[derive(Default, Deref, DerefMut)]
pub struct Posts(HashMap<PathBuf, Post>);
