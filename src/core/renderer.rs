use crate::domain::model::{ImageElement, MuseumObject, ObjectRef, ResponsePolicy};
use crate::domain::ports::{Container, MuseumApi};
use crate::utils::error::Result;
use std::sync::Arc;

/// Second step: fetch the object, insert its small image at the top of the
/// container.
pub struct DetailRenderer<A: MuseumApi, C: Container> {
    api: Arc<A>,
    container: Arc<C>,
    policy: ResponsePolicy,
}

impl<A: MuseumApi, C: Container> DetailRenderer<A, C> {
    pub fn new(api: Arc<A>, container: Arc<C>, policy: ResponsePolicy) -> Self {
        Self {
            api,
            container,
            policy,
        }
    }

    pub async fn render(&self, object: ObjectRef) -> Result<ImageElement> {
        let response = self.api.object(object).await?;
        response.check_status(self.policy)?;

        let museum_object = MuseumObject::parse(&response, self.policy)?;
        if museum_object.primary_image_small.is_empty() {
            tracing::warn!("Object {} has no small image, inserting an empty <img>", object);
        }

        let image = ImageElement::new(museum_object.primary_image_small);
        self.container.prepend(image.clone()).await;
        tracing::info!("Inserted image for object {}: {}", object, image.src);

        Ok(image)
    }
}
