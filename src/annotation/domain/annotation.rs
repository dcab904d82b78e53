//! Annotation aggregate and its motivation-specific variants.

use super::{
    Agent, AnnotationError, AnnotationId, AnnotationRecord, Body, Fragment, ImageInfo, Purpose,
    Region, Target,
};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Purpose for which an annotation was created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Motivation {
    /// Commenting on the target.
    Commenting,
    /// Describing the target.
    Describing,
}

impl Motivation {
    /// Returns the Web Annotation motivation name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Commenting => "commenting",
            Self::Describing => "describing",
        }
    }
}

impl fmt::Display for Motivation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Tag applied to an annotation, optionally scoped to a sub-region.
///
/// A tag without a fragment applies to the whole target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    /// Tag value.
    pub tag: String,
    /// Sub-region the tag applies to.
    pub fragment: Option<Fragment>,
}

/// Motivation-specific annotation content.
///
/// Each variant carries only the state that is legal for its motivation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnotationContent {
    /// A comment; its sole body is the comment text.
    Comment,
    /// A description with optional tags and a classification.
    Description {
        /// Tags in insertion order.
        tags: Vec<Tag>,
        /// Classification of the target, if any.
        classification: Option<String>,
    },
}

impl AnnotationContent {
    /// Returns the motivation implied by the content variant.
    #[must_use]
    pub const fn motivation(&self) -> Motivation {
        match self {
            Self::Comment => Motivation::Commenting,
            Self::Description { .. } => Motivation::Describing,
        }
    }
}

/// Parameters for creating a comment annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    image_info: ImageInfo,
    value: String,
    creator: Option<Agent>,
    generator: Option<Agent>,
}

impl NewComment {
    /// Creates comment parameters for the given image and comment text.
    #[must_use]
    pub fn new(image_info: ImageInfo, value: impl Into<String>) -> Self {
        Self {
            image_info,
            value: value.into(),
            creator: None,
            generator: None,
        }
    }

    /// Sets the annotation creator.
    #[must_use]
    pub fn with_creator(mut self, creator: Agent) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Sets the annotation generator.
    #[must_use]
    pub fn with_generator(mut self, generator: Agent) -> Self {
        self.generator = Some(generator);
        self
    }
}

/// Parameters for creating a description annotation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDescription {
    image_info: ImageInfo,
    value: String,
    tag: Option<String>,
    fragment: Option<Fragment>,
    classification: Option<String>,
    creator: Option<Agent>,
    generator: Option<Agent>,
}

impl NewDescription {
    /// Creates description parameters for the given image and text.
    #[must_use]
    pub fn new(image_info: ImageInfo, value: impl Into<String>) -> Self {
        Self {
            image_info,
            value: value.into(),
            tag: None,
            fragment: None,
            classification: None,
            creator: None,
            generator: None,
        }
    }

    /// Sets the tag and the sub-region it applies to.
    ///
    /// An empty tag is ignored when the annotation is built.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>, fragment: Option<Fragment>) -> Self {
        self.tag = Some(tag.into());
        self.fragment = fragment;
        self
    }

    /// Sets the classification.
    ///
    /// An empty classification is ignored when the annotation is built.
    #[must_use]
    pub fn with_classification(mut self, classification: impl Into<String>) -> Self {
        self.classification = Some(classification.into());
        self
    }

    /// Sets the annotation creator.
    #[must_use]
    pub fn with_creator(mut self, creator: Agent) -> Self {
        self.creator = Some(creator);
        self
    }

    /// Sets the annotation generator.
    #[must_use]
    pub fn with_generator(mut self, generator: Agent) -> Self {
        self.generator = Some(generator);
        self
    }
}

/// A Web Annotation on an IIIF image.
///
/// The identifier, motivation, creator and generator are fixed at
/// construction. Bodies are append-only and keep insertion order; the first
/// body is the primary content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Annotation {
    id: AnnotationId,
    target: Target,
    body: Vec<Body>,
    content: AnnotationContent,
    creator: Option<Agent>,
    generator: Option<Agent>,
    created: DateTime<Utc>,
    generated: Option<DateTime<Utc>>,
}

impl Annotation {
    /// Creates a comment annotation.
    ///
    /// The annotation receives exactly one plain-text body with purpose
    /// `commenting`.
    #[must_use]
    pub fn comment(request: NewComment, clock: &impl Clock) -> Self {
        let NewComment {
            image_info,
            value,
            creator,
            generator,
        } = request;
        let mut annotation =
            Self::base(AnnotationContent::Comment, &image_info, creator, generator, clock);
        annotation.body.push(Body::text(value, Purpose::Commenting));
        annotation
    }

    /// Creates a description annotation.
    ///
    /// The tag and classification are applied only when non-empty.
    #[must_use]
    pub fn description(request: NewDescription, clock: &impl Clock) -> Self {
        let NewDescription {
            image_info,
            value,
            tag,
            fragment,
            classification,
            creator,
            generator,
        } = request;
        let tags = tag
            .filter(|raw| !raw.is_empty())
            .map(|raw| Tag {
                tag: raw,
                fragment,
            })
            .into_iter()
            .collect();
        let content = AnnotationContent::Description {
            tags,
            classification: classification.filter(|raw| !raw.is_empty()),
        };

        let mut annotation = Self::base(content, &image_info, creator, generator, clock);
        annotation.body.push(Body::text(value, Purpose::Describing));
        annotation
    }

    /// Shared construction: target from image info, no bodies yet.
    fn base(
        content: AnnotationContent,
        image_info: &ImageInfo,
        creator: Option<Agent>,
        generator: Option<Agent>,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let generated = generator.is_some().then_some(timestamp);
        Self {
            id: AnnotationId::new(),
            target: Target::from_image_info(image_info),
            body: Vec::new(),
            content,
            creator,
            generator,
            created: timestamp,
            generated,
        }
    }

    /// Returns the annotation identifier.
    #[must_use]
    pub const fn id(&self) -> AnnotationId {
        self.id
    }

    /// Returns the annotation motivation.
    #[must_use]
    pub const fn motivation(&self) -> Motivation {
        self.content.motivation()
    }

    /// Returns the motivation-specific content.
    #[must_use]
    pub const fn content(&self) -> &AnnotationContent {
        &self.content
    }

    /// Returns the annotation target.
    #[must_use]
    pub const fn target(&self) -> &Target {
        &self.target
    }

    /// Returns the bodies in insertion order.
    #[must_use]
    pub fn body(&self) -> &[Body] {
        &self.body
    }

    /// Returns the tags; always empty for comments.
    #[must_use]
    pub fn tags(&self) -> &[Tag] {
        match &self.content {
            AnnotationContent::Comment => &[],
            AnnotationContent::Description { tags, .. } => tags.as_slice(),
        }
    }

    /// Returns the classification, if any.
    #[must_use]
    pub fn classification(&self) -> Option<&str> {
        match &self.content {
            AnnotationContent::Comment => None,
            AnnotationContent::Description { classification, .. } => classification.as_deref(),
        }
    }

    /// Returns the creator, if any.
    #[must_use]
    pub const fn creator(&self) -> Option<&Agent> {
        self.creator.as_ref()
    }

    /// Returns the generator, if any.
    #[must_use]
    pub const fn generator(&self) -> Option<&Agent> {
        self.generator.as_ref()
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the generation timestamp, present when a generator is set.
    #[must_use]
    pub const fn generated(&self) -> Option<DateTime<Utc>> {
        self.generated
    }

    /// Appends a body. Bodies are not deduplicated.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::NotPermitted`] for comments, whose single
    /// body is fixed at construction.
    pub fn add_body(&mut self, body: Body) -> Result<(), AnnotationError> {
        match self.content {
            AnnotationContent::Comment => Err(AnnotationError::not_permitted(
                Motivation::Commenting,
                "adding a body",
            )),
            AnnotationContent::Description { .. } => {
                self.body.push(body);
                Ok(())
            }
        }
    }

    /// Appends a plain-text body with purpose `describing`.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::NotPermitted`] for comments.
    pub fn add_description(&mut self, value: impl Into<String>) -> Result<(), AnnotationError> {
        self.add_body(Body::text(value, Purpose::Describing))
    }

    /// Appends a tag, optionally scoped to a sub-region of the target.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::NotPermitted`] for comments.
    pub fn add_tag(
        &mut self,
        tag: impl Into<String>,
        fragment: Option<Fragment>,
    ) -> Result<(), AnnotationError> {
        match &mut self.content {
            AnnotationContent::Comment => Err(AnnotationError::not_permitted(
                Motivation::Commenting,
                "tagging",
            )),
            AnnotationContent::Description { tags, .. } => {
                tags.push(Tag {
                    tag: tag.into(),
                    fragment,
                });
                Ok(())
            }
        }
    }

    /// Sets or replaces the classification.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::NotPermitted`] for comments.
    pub fn add_classification(
        &mut self,
        value: impl Into<String>,
    ) -> Result<(), AnnotationError> {
        match &mut self.content {
            AnnotationContent::Comment => Err(AnnotationError::not_permitted(
                Motivation::Commenting,
                "classifying",
            )),
            AnnotationContent::Description { classification, .. } => {
                *classification = Some(value.into());
                Ok(())
            }
        }
    }

    /// Narrows the target to a region of the image.
    ///
    /// # Errors
    ///
    /// Returns [`AnnotationError::EmptyRegion`] or
    /// [`AnnotationError::RegionOutOfBounds`] when the region is unusable.
    pub fn select_region(&mut self, region: Region) -> Result<(), AnnotationError> {
        self.target.select(region)
    }

    /// Widens the target back to the whole image.
    pub fn clear_region(&mut self) {
        self.target.clear_selection();
    }

    /// Renders the annotation as a Web Annotation record.
    #[must_use]
    pub fn to_record(&self) -> AnnotationRecord {
        AnnotationRecord::from(self)
    }
}
